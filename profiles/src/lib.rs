// Copyright 2026 The vk-profiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vulkan profiles as a library: named, versioned bundles of capability
//! requirements (extensions, features, properties, queue families, formats)
//! with support checks and profile-aware instance and device creation on
//! top of [`ash`].
//!
//! A profile is identified by a [`ProfileProperties`].  Query functions
//! reflect over a built-in catalog of profile descriptors;
//! [`get_instance_profile_support`] and [`get_physical_device_profile_support`]
//! decide whether a loader or GPU can satisfy one; [`create_instance`] and
//! [`create_device`] fold a profile's requirements into the caller's create
//! info before the loader sees it.
//!
//! Capability gaps are reported as `Ok(false)` from the support checks.
//! [`Error`] is reserved for unknown profiles, policy conflicts, and loader
//! failures.

use ash::vk;

mod catalog;
mod chain;
mod compare;
mod create;
mod desc;
mod profiles;
mod query;
mod support;

pub use catalog::{get_profile_fallbacks, get_profiles};
pub use create::{
    create_device, create_instance, DeviceCreateFlags, DeviceCreateInfo, InstanceCreateFlags,
    InstanceCreateInfo,
};
pub use desc::{ExtensionProperties, ProfileProperties, MAX_PROFILE_NAME_SIZE};
pub use query::{
    get_profile_device_extensions, get_profile_feature_struct_types, get_profile_format_properties,
    get_profile_format_struct_types, get_profile_formats, get_profile_instance_extensions,
    get_profile_properties, get_profile_property_struct_types,
    get_profile_queue_family_properties, get_profile_queue_family_struct_types,
    get_profile_features,
};
pub use support::{get_instance_profile_support, get_physical_device_profile_support};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The catalog has no entry for the requested profile.
    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    /// The caller's create info and the profile's requirements cannot be
    /// combined under the given policy flags.
    #[error("create policy conflict: {0}")]
    PolicyConflict(&'static str),

    /// A required query entry point could not be resolved.
    #[error("missing extension: {0}")]
    ExtensionNotPresent(&'static str),

    /// The loader reported an error.
    #[error("Vulkan: {0}")]
    Vk(#[from] vk::Result),
}
