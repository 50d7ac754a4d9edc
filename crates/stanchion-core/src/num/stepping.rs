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

//! # Bounded Stepwise Accumulation
//!
//! Iterative accumulation `start ± step_amount`, repeated `step_count`
//! times, with boundary-crossing detection. Before every step the engine
//! tests whether the step would leave `[min_value, max_value]` and halts
//! *before* performing it, so no intermediate value is ever computed by
//! wrapping, saturating, or otherwise leaving the domain.
//!
//! ## Motivation
//!
//! A walk that relies on the representation's wrap behavior is undefined
//! for signed integers and silently wrong for unsigned ones. The
//! precondition tests here are pure comparisons against the domain
//! bounds, which also makes the same code path correct for
//! floating-point domains where no `checked_add` exists.
//!
//! ## Highlights
//!
//! - One generic algorithm for every [`StepNumeric`] domain.
//! - Checked API ([`try_accumulate`]) returning
//!   `Result<T, BoundaryCrossed>`.
//! - Sentinel API ([`accumulate`]) encoding failure in-band as the
//!   opposite-extreme domain value, for callers that need the historic
//!   in-band convention in hot loops.
//! - Configurable subtraction floor ([`FloorPolicy`]): a generic floor
//!   of zero, or the domain's true minimum.
//!
//! ## Usage
//!
//! ```rust
//! use stanchion_core::num::stepping::{
//!     try_accumulate, FloorPolicy, StepDirection,
//! };
//!
//! // Five steps of 25 from 0 stay inside i8.
//! let ok = try_accumulate(0i8, 25, 5, StepDirection::Add, FloorPolicy::Zero);
//! assert_eq!(ok, Ok(125));
//!
//! // The sixth step would cross 127 and is never performed.
//! let err = try_accumulate(0i8, 25, 6, StepDirection::Add, FloorPolicy::Zero);
//! assert!(err.is_err());
//! ```

use crate::num::numeric::StepNumeric;

/// The direction of a bounded walk: repeated addition or repeated
/// subtraction of the step amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepDirection {
    /// Each step adds `step_amount`; the walk is bounded above by
    /// `T::max_value()`.
    Add,
    /// Each step subtracts `step_amount`; the walk is bounded below by
    /// the configured [`FloorPolicy`].
    Subtract,
}

/// The floor a [`StepDirection::Subtract`] walk is tested against.
///
/// The historic behavior treats `0` as a generic minimum, which for
/// signed domains refuses to walk into negative territory even though
/// the domain could represent it. Both interpretations are offered;
/// callers reproducing the historic demo output want [`FloorPolicy::Zero`],
/// callers that want the full signed range want [`FloorPolicy::DomainMin`].
/// The policy is irrelevant for [`StepDirection::Add`] and identical for
/// unsigned domains, where the true minimum *is* zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloorPolicy {
    /// Subtraction may not take the running value below `T::zero()`.
    Zero,
    /// Subtraction may not take the running value below `T::min_value()`.
    DomainMin,
}

impl FloorPolicy {
    /// Resolves the policy to the concrete floor value for a domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stanchion_core::num::stepping::FloorPolicy;
    /// assert_eq!(FloorPolicy::Zero.floor::<i8>(), 0);
    /// assert_eq!(FloorPolicy::DomainMin.floor::<i8>(), -128);
    /// assert_eq!(FloorPolicy::DomainMin.floor::<u8>(), 0);
    /// ```
    #[inline]
    pub fn floor<T: StepNumeric>(self) -> T {
        match self {
            FloorPolicy::Zero => T::zero(),
            FloorPolicy::DomainMin => T::min_value(),
        }
    }
}

/// The single failure kind of the engine: performing the next step would
/// have taken the running value outside the domain bounds.
///
/// Carries no payload; which bound was at risk follows from the walk
/// direction (`Add` crosses the maximum, `Subtract` crosses the floor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundaryCrossed;

impl std::fmt::Display for BoundaryCrossed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "boundary exceeded")
    }
}

impl std::error::Error for BoundaryCrossed {}

/// Runs a bounded walk of `step_count` steps of `step_amount` from
/// `start`, halting before any step that would cross a domain bound.
///
/// `step_amount` is a magnitude and must be non-negative; a negative
/// step amount inverts the meaning of the precondition tests and is not
/// supported. `step_count == 0` is a no-op and returns `start`.
///
/// The precondition tested before each step is:
///
/// - `Add`: `max_value - step_amount < current` (the step would exceed
///   the maximum),
/// - `Subtract`: `floor + step_amount > current` (the step would go
///   below the floor selected by `floor_policy`).
///
/// Both tests are themselves wrap-free: `step_amount` is non-negative,
/// so `max_value - step_amount` and `floor + step_amount` stay inside
/// the domain.
///
/// Pure function of its inputs; no side effects, safe to call from any
/// number of threads.
///
/// # Errors
///
/// Returns [`BoundaryCrossed`] if a precondition fails. The running
/// value accumulated so far is discarded; the operation either completes
/// fully or reports the crossing.
///
/// # Examples
///
/// ```rust
/// use stanchion_core::num::stepping::{
///     try_accumulate, BoundaryCrossed, FloorPolicy, StepDirection,
/// };
///
/// // Exact accounting while in bounds.
/// let r = try_accumulate(10u32, 7, 4, StepDirection::Add, FloorPolicy::Zero);
/// assert_eq!(r, Ok(38));
///
/// // Stepping exactly onto the bound succeeds.
/// let r = try_accumulate(0u8, 51, 5, StepDirection::Add, FloorPolicy::Zero);
/// assert_eq!(r, Ok(255));
///
/// // One step further is refused.
/// let r = try_accumulate(0u8, 51, 6, StepDirection::Add, FloorPolicy::Zero);
/// assert_eq!(r, Err(BoundaryCrossed));
/// ```
pub fn try_accumulate<T>(
    start: T,
    step_amount: T,
    step_count: u64,
    direction: StepDirection,
    floor_policy: FloorPolicy,
) -> Result<T, BoundaryCrossed>
where
    T: StepNumeric,
{
    let mut current = start;

    match direction {
        StepDirection::Add => {
            let ceiling = T::max_value();
            for _ in 0..step_count {
                if ceiling - step_amount < current {
                    return Err(BoundaryCrossed);
                }
                current = current + step_amount;
            }
        }
        StepDirection::Subtract => {
            let floor = floor_policy.floor::<T>();
            for _ in 0..step_count {
                if floor + step_amount > current {
                    return Err(BoundaryCrossed);
                }
                current = current - step_amount;
            }
        }
    }

    Ok(current)
}

/// Like [`try_accumulate`], but reports a boundary crossing in-band
/// through a sentinel value instead of a `Result`.
///
/// The sentinel is the *opposite-direction* extreme of the domain:
///
/// - `Add` failure returns `T::min_value()`,
/// - `Subtract` failure returns `T::max_value()`.
///
/// This asymmetry is deliberate: a pure add walk starting at the
/// domain's natural origin can never legitimately compute the minimum,
/// and a pure subtract walk can never legitimately compute the maximum,
/// so the sentinel cannot collide with a successful result of that walk.
///
/// # Caveat
///
/// The convention is narrow, not a general error channel. A walk whose
/// `start` already makes the sentinel value reachable (for example an
/// add walk starting below zero on a signed domain) makes "boundary hit"
/// and "legitimate result" indistinguishable. Callers who cannot
/// guarantee the convention's preconditions should use
/// [`try_accumulate`] instead.
///
/// # Examples
///
/// ```rust
/// use stanchion_core::num::stepping::{accumulate, FloorPolicy, StepDirection};
///
/// assert_eq!(accumulate(0i8, 25, 5, StepDirection::Add, FloorPolicy::Zero), 125);
/// assert_eq!(accumulate(0i8, 25, 6, StepDirection::Add, FloorPolicy::Zero), i8::MIN);
///
/// assert_eq!(accumulate(127i8, 25, 5, StepDirection::Subtract, FloorPolicy::Zero), 2);
/// assert_eq!(accumulate(127i8, 25, 6, StepDirection::Subtract, FloorPolicy::Zero), i8::MAX);
/// ```
#[inline]
pub fn accumulate<T>(
    start: T,
    step_amount: T,
    step_count: u64,
    direction: StepDirection,
    floor_policy: FloorPolicy,
) -> T
where
    T: StepNumeric,
{
    match try_accumulate(start, step_amount, step_count, direction, floor_policy) {
        Ok(value) => value,
        Err(BoundaryCrossed) => match direction {
            StepDirection::Add => T::min_value(),
            StepDirection::Subtract => T::max_value(),
        },
    }
}
