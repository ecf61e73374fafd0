// Copyright 2026 The vk-profiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Profile data
//!
//! One module per catalog entry.  Each module is table-shaped: extension
//! lists, recognized structure types, a filler/comparator pair per category,
//! the four chain builders, and a single `DESC` constant tying them together.
//! The required values appear twice by construction, once in the filler and
//! once in the comparator; the catalog tests pin the two against each other.

pub(crate) mod android_baseline_2021;
pub(crate) mod khr_roadmap_2022;
pub(crate) mod khr_roadmap_2024;
pub(crate) mod lunarg_desktop_baseline_2023;
