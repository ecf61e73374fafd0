// Copyright 2026 The vk-profiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Satisfaction rules
//!
//! The field-wise tests that comparator bodies are made of.  The direction
//! depends on what the field means: limits that grant capability (maxima,
//! counts, bit widths) are satisfied by `live >= required`, limits that
//! constrain (minima, alignments, granularities) by `live <= required`.
//! Alignments must additionally be powers of two, and float granularities
//! must evenly divide their canonical reference.

use ash::vk;

/// Boolean capability: a required `TRUE` needs a live `TRUE`.
pub(crate) fn feature(live: vk::Bool32) -> bool {
    live == vk::TRUE
}

/// Capability-granting limit (`max*`, counts, bit widths).
pub(crate) fn gte<T: PartialOrd>(live: T, required: T) -> bool {
    live >= required
}

/// Capability-constraining limit (`min*`, granularity ceilings).  Also the
/// rule for signed range minimums, where "lower" means more negative.
pub(crate) fn lte<T: PartialOrd>(live: T, required: T) -> bool {
    live <= required
}

/// Alignment minimum: constrained from above and a power of two.  The check
/// runs directly on the integer value.
pub(crate) fn aligned(live: vk::DeviceSize, required: vk::DeviceSize) -> bool {
    live <= required && live.is_power_of_two()
}

/// Whether `granularity` evenly divides `reference`, with the float modulus
/// epsilon the profile format prescribes.
pub(crate) fn is_multiple(reference: f32, granularity: f32) -> bool {
    if granularity <= 0.0 {
        return false;
    }
    let rem = reference % granularity;
    rem.abs() < 1e-4 || (granularity - rem).abs() < 1e-4
}

/// Float granularity: constrained from above and dividing `reference`.
pub(crate) fn granular(live: f32, required: f32, reference: f32) -> bool {
    live <= required && is_multiple(reference, live)
}
