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

//! # Stanchion Demo
//!
//! Walks every supported numeric domain up to its maximum and down to
//! its floor using the bounded accumulation engine, printing one line
//! per walk. For each domain the step amount is `max_value / 5`; the
//! first walk takes exactly 5 steps (guaranteed in bounds), the second
//! takes 6 (guaranteed to cross), demonstrating detection on every
//! integer width and floating-point precision.
//!
//! The printed text is diagnostic only; the one fixed phrase is
//! `boundary exceeded` on a detected crossing.

use num_traits::FromPrimitive;
use stanchion_core::num::numeric::StepNumeric;
use stanchion_core::num::stepping::{try_accumulate, FloorPolicy, StepDirection};
use std::any::type_name;
use std::ops::Div;

/// Number of in-bounds steps per walk; the step amount is derived as
/// `max_value / FIXED_STEP_COUNT`, so one extra step always crosses.
const FIXED_STEP_COUNT: u64 = 5;

/// Runs the two demo walks (in bounds, then crossing) for one domain
/// and prints both outcomes.
fn run_demo<T>(direction: StepDirection)
where
    T: StepNumeric + FromPrimitive + Div<Output = T>,
{
    let divisor =
        T::from_u64(FIXED_STEP_COUNT).expect("step count is representable in every demo domain");
    let step_amount = T::max_value() / divisor;

    let (label, start) = match direction {
        StepDirection::Add => ("adding", T::zero()),
        StepDirection::Subtract => ("subtracting", T::max_value()),
    };

    println!("{} walk over {}", label, type_name::<T>());

    for step_count in [FIXED_STEP_COUNT, FIXED_STEP_COUNT + 1] {
        print!("\t({}, {}, {}) = ", start, step_amount, step_count);
        match try_accumulate(start, step_amount, step_count, direction, FloorPolicy::Zero) {
            Ok(result) => println!("{}", result),
            Err(crossed) => println!("{}", crossed),
        }
    }
}

/// Runs one direction of the demo over all supported domains:
/// 6 signed integer widths, 5 unsigned widths, and both stable
/// floating-point precisions.
fn run_suite(direction: StepDirection, star_line: &str) {
    let title = match direction {
        StepDirection::Add => "Overflow",
        StepDirection::Subtract => "Underflow",
    };

    println!();
    println!("{}", star_line);
    println!("*** Running {} Walks ***", title);
    println!("{}", star_line);

    // signed integers
    run_demo::<i8>(direction);
    run_demo::<i16>(direction);
    run_demo::<i32>(direction);
    run_demo::<i64>(direction);
    run_demo::<i128>(direction);
    run_demo::<isize>(direction);

    // unsigned integers
    run_demo::<u8>(direction);
    run_demo::<u16>(direction);
    run_demo::<u32>(direction);
    run_demo::<u64>(direction);
    run_demo::<u128>(direction);

    // real numbers
    run_demo::<f32>(direction);
    run_demo::<f64>(direction);
}

fn main() {
    let star_line = "*".repeat(50);

    println!("Starting bounded overflow / underflow walks");
    run_suite(StepDirection::Add, &star_line);
    run_suite(StepDirection::Subtract, &star_line);
    println!();
    println!("All bounded walks complete");
}
