// Copyright 2026 The vk-profiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Catalog
//!
//! The process-wide profile table.  Descriptors are `'static` constants and
//! lookups are a linear scan; the catalog never exceeds a few dozen entries.

use crate::desc::{ProfileDesc, ProfileProperties};
use crate::profiles;
use crate::Error;

pub(crate) static CATALOG: &[&ProfileDesc] = &[
    &profiles::android_baseline_2021::DESC,
    &profiles::khr_roadmap_2022::DESC,
    &profiles::khr_roadmap_2024::DESC,
    &profiles::lunarg_desktop_baseline_2023::DESC,
];

/// Exact (name, spec-version) match.
pub(crate) fn lookup(props: &ProfileProperties) -> Option<&'static ProfileDesc> {
    CATALOG
        .iter()
        .copied()
        .find(|desc| desc.props == *props)
}

/// Highest-versioned entry with a matching name.  Support checks use this
/// form and report a requested version above the catalog's as unsupported
/// rather than unknown.
pub(crate) fn find_by_name(props: &ProfileProperties) -> Option<&'static ProfileDesc> {
    CATALOG
        .iter()
        .copied()
        .filter(|desc| desc.props.same_name(props))
        .max_by_key(|desc| desc.props.spec_version)
}

static PROFILES: &[ProfileProperties] = &[
    profiles::android_baseline_2021::PROPS,
    profiles::khr_roadmap_2022::PROPS,
    profiles::khr_roadmap_2024::PROPS,
    profiles::lunarg_desktop_baseline_2023::PROPS,
];

/// Every profile the catalog knows, in catalog order.
pub fn get_profiles() -> &'static [ProfileProperties] {
    PROFILES
}

/// The fallback identities recorded for a profile: alternatives worth trying
/// when the primary is unsupported, typically older or less demanding.
pub fn get_profile_fallbacks(
    profile: &ProfileProperties,
) -> Result<&'static [ProfileProperties], Error> {
    let desc = lookup(profile).ok_or_else(|| Error::UnknownProfile(profile.name().to_owned()))?;
    Ok(desc.fallbacks)
}
