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

//! # Step Numeric Trait
//!
//! Unified numeric bounds for the bounded accumulation engine.
//! `StepNumeric` collects the capabilities a domain type must offer:
//! value semantics (`Copy`), ordering, by-value addition and
//! subtraction, and the representable bounds (`Bounded`) together with
//! the additive identity (`Zero`) from `num_traits`.
//!
//! ## Motivation
//!
//! The engine runs one algorithm over many numeric domains of differing
//! bit widths and bounds. Collecting the required bounds into a single
//! alias keeps generic signatures short and guarantees that integer and
//! floating-point domains are handled by the very same code path.
//!
//! Note that only `PartialOrd` is required, not `Ord`, so that the
//! floating-point primitives qualify.

use core::ops::{Add, Sub};
use num_traits::{Bounded, Zero};

/// A trait alias for numeric types the bounded accumulation engine can
/// walk over.
///
/// Satisfied by all primitive integer types (`i8` through `i128`,
/// `u8` through `u128`, `isize`, `usize`) as well as `f32` and `f64`.
///
/// # Examples
///
/// ```rust
/// # use stanchion_core::num::numeric::StepNumeric;
/// fn ceiling<T: StepNumeric>() -> T {
///     T::max_value()
/// }
///
/// assert_eq!(ceiling::<i8>(), 127);
/// assert_eq!(ceiling::<u16>(), 65_535);
/// assert_eq!(ceiling::<f32>(), f32::MAX);
/// ```
pub trait StepNumeric:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Bounded
    + Zero
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
{
}

impl<T> StepNumeric for T where
    T: Copy
        + PartialOrd
        + Add<Output = Self>
        + Sub<Output = Self>
        + Bounded
        + Zero
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_step_numeric<T: StepNumeric>() {}

    #[test]
    fn test_signed_widths_qualify() {
        assert_step_numeric::<i8>();
        assert_step_numeric::<i16>();
        assert_step_numeric::<i32>();
        assert_step_numeric::<i64>();
        assert_step_numeric::<i128>();
        assert_step_numeric::<isize>();
    }

    #[test]
    fn test_unsigned_widths_qualify() {
        assert_step_numeric::<u8>();
        assert_step_numeric::<u16>();
        assert_step_numeric::<u32>();
        assert_step_numeric::<u64>();
        assert_step_numeric::<u128>();
        assert_step_numeric::<usize>();
    }

    #[test]
    fn test_float_precisions_qualify() {
        assert_step_numeric::<f32>();
        assert_step_numeric::<f64>();
    }

    #[test]
    fn test_bounds_are_usable_generically() {
        fn span<T: StepNumeric>() -> (T, T) {
            (T::min_value(), T::max_value())
        }

        assert_eq!(span::<i8>(), (-128, 127));
        assert_eq!(span::<u8>(), (0, 255));
        let (lo, hi) = span::<f64>();
        assert_eq!(lo, f64::MIN);
        assert_eq!(hi, f64::MAX);
    }
}
