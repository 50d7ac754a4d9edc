// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Stanchion Core
//!
//! Bounded, wrap-free stepwise arithmetic over generic numeric domains.
//! This crate provides one algorithm: iterative accumulation
//! (`start ± step_amount`, repeated `step_count` times) that detects a
//! boundary crossing *before* performing the step that would cross it,
//! for any numeric domain with known minimum and maximum representable
//! values.
//!
//! ## Modules
//!
//! - `num::stepping`: The bounded accumulation engine. Offers a checked
//!   API returning `Result<T, BoundaryCrossed>` and a sentinel API that
//!   encodes failure in-band as the opposite-extreme domain value.
//! - `num::numeric`: The `StepNumeric` trait alias collecting the
//!   generic bounds the engine requires, satisfied by all primitive
//!   signed/unsigned integer widths and floating-point precisions.
//!
//! ## Purpose
//!
//! Wraparound on overflow is undefined or misleading for several signed
//! domains and silently wrong for the rest. The engine here never relies
//! on the representation's wrap behavior: every step is guarded by a
//! precondition test against the domain bound, so no intermediate or
//! final value ever leaves `[min_value, max_value]`.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
