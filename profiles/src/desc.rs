// Copyright 2026 The vk-profiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Profile descriptors
//!
//! The immutable data model behind the catalog.  A profile is a named,
//! versioned bundle of requirements; one `ProfileDesc` constant per profile
//! holds its identity, minimum API version, extension lists, fallback chain,
//! and the per-category dispatch tables (filler, comparator, chain builder).
//!
//! Descriptors are program-lifetime constants.  Nothing here touches a
//! device.

use std::ffi::CStr;

use ash::vk;

use crate::chain::{ChainNode, Record};

/// Fixed storage for a profile name, including the terminating NUL.
pub const MAX_PROFILE_NAME_SIZE: usize = 256;

/// Profile identity: a fixed-size NUL-terminated name plus a spec version.
///
/// Two profiles with the same name but different spec versions are distinct
/// catalog entries.  Equality compares the name bytes first, then the spec
/// version.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ProfileProperties {
    pub profile_name: [u8; MAX_PROFILE_NAME_SIZE],
    pub spec_version: u32,
}

impl ProfileProperties {
    pub const fn new(name: &str, spec_version: u32) -> Self {
        let bytes = name.as_bytes();
        assert!(bytes.len() < MAX_PROFILE_NAME_SIZE);
        let mut profile_name = [0u8; MAX_PROFILE_NAME_SIZE];
        let mut i = 0;
        while i < bytes.len() {
            profile_name[i] = bytes[i];
            i += 1;
        }
        Self {
            profile_name,
            spec_version,
        }
    }

    /// The name up to the first NUL.
    pub fn name(&self) -> &str {
        let end = self
            .profile_name
            .iter()
            .position(|b| *b == 0)
            .unwrap_or(MAX_PROFILE_NAME_SIZE);
        std::str::from_utf8(&self.profile_name[..end]).unwrap_or("")
    }

    pub fn same_name(&self, other: &ProfileProperties) -> bool {
        self.profile_name == other.profile_name
    }
}

impl std::fmt::Debug for ProfileProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileProperties")
            .field("profile_name", &self.name())
            .field("spec_version", &self.spec_version)
            .finish()
    }
}

/// A required extension: name plus minimum extension spec version.
#[derive(Clone, Copy, Debug)]
pub struct ExtensionProperties {
    pub name: &'static CStr,
    pub spec_version: u32,
}

impl ExtensionProperties {
    pub const fn new(name: &'static CStr, spec_version: u32) -> Self {
        Self { name, spec_version }
    }
}

/// Stamps a profile's required values into a recognized record.  Records
/// whose kind the profile does not recognize are left untouched.
pub(crate) type Filler = fn(&mut Record);

/// Tests whether a record populated from a live device meets or exceeds the
/// profile's requirement.  Unrecognized records are vacuously satisfied.
pub(crate) type Comparator = fn(&Record) -> bool;

/// Appends the profile-relevant optional records for one category onto the
/// caller's chain head, then runs the continuation while the stack-owned
/// temporaries are still live.
pub(crate) type ChainBuilder = unsafe fn(ChainNode, &mut dyn FnMut(ChainNode));

/// Queue-family variant of [`ChainBuilder`]: the builder sees the whole
/// returned-family array and is responsible for chaining per-family records
/// onto every element before the continuation runs.
pub(crate) type QueueFamilyChainBuilder = unsafe fn(
    &mut [vk::QueueFamilyProperties2<'static>],
    &mut dyn FnMut(&mut [vk::QueueFamilyProperties2<'static>]),
);

/// One category (feature or property) of a profile: the record kinds it
/// recognizes and the dispatch pair over them.
pub(crate) struct CategoryDesc {
    pub struct_types: &'static [vk::StructureType],
    pub fill: Filler,
    pub compare: Comparator,
}

/// One queue-family requirement.  The comparator must hold for every record
/// chained onto a candidate family entry.
pub(crate) struct QueueFamilyDesc {
    pub fill: Filler,
    pub compare: Comparator,
}

/// Requirements for one format.  Formats are keyed by format code; a code
/// appears at most once per profile.
pub(crate) struct FormatDesc {
    pub format: vk::Format,
    pub fill: Filler,
    pub compare: Comparator,
}

/// The complete immutable descriptor for one profile.
///
/// Extension slices are sorted and deduplicated by extension name, and every
/// `struct_types` slice lists each structure type at most once.  The catalog
/// tests enforce both.
pub(crate) struct ProfileDesc {
    pub props: ProfileProperties,
    pub min_api_version: u32,
    pub instance_extensions: &'static [ExtensionProperties],
    pub device_extensions: &'static [ExtensionProperties],
    pub fallbacks: &'static [ProfileProperties],

    pub features: CategoryDesc,
    pub properties: CategoryDesc,
    pub queue_families: &'static [QueueFamilyDesc],
    pub queue_family_struct_types: &'static [vk::StructureType],
    pub formats: &'static [FormatDesc],
    pub format_struct_types: &'static [vk::StructureType],

    pub feature_chain: ChainBuilder,
    pub property_chain: ChainBuilder,
    pub queue_family_chain: QueueFamilyChainBuilder,
    pub format_chain: ChainBuilder,
}
