// Copyright 2026 The vk-profiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Profile queries
//!
//! Read-only reflection over catalog entries: extension lists, recognized
//! record types, required formats, and fillers that stamp a profile's
//! minimums into caller-owned record chains.  Lookups here are exact on
//! (name, spec version); an entry the catalog does not carry is an error,
//! never a silent no-op.

use std::ffi::c_void;

use ash::vk;

use crate::catalog;
use crate::chain::{self, ChainNode, Record};
use crate::desc::{ExtensionProperties, ProfileDesc, ProfileProperties};
use crate::Error;

fn lookup(profile: &ProfileProperties) -> Result<&'static ProfileDesc, Error> {
    catalog::lookup(profile).ok_or_else(|| Error::UnknownProfile(profile.name().to_owned()))
}

pub fn get_profile_instance_extensions(
    profile: &ProfileProperties,
) -> Result<&'static [ExtensionProperties], Error> {
    Ok(lookup(profile)?.instance_extensions)
}

pub fn get_profile_device_extensions(
    profile: &ProfileProperties,
) -> Result<&'static [ExtensionProperties], Error> {
    Ok(lookup(profile)?.device_extensions)
}

pub fn get_profile_feature_struct_types(
    profile: &ProfileProperties,
) -> Result<&'static [vk::StructureType], Error> {
    Ok(lookup(profile)?.features.struct_types)
}

pub fn get_profile_property_struct_types(
    profile: &ProfileProperties,
) -> Result<&'static [vk::StructureType], Error> {
    Ok(lookup(profile)?.properties.struct_types)
}

pub fn get_profile_queue_family_struct_types(
    profile: &ProfileProperties,
) -> Result<&'static [vk::StructureType], Error> {
    Ok(lookup(profile)?.queue_family_struct_types)
}

pub fn get_profile_format_struct_types(
    profile: &ProfileProperties,
) -> Result<&'static [vk::StructureType], Error> {
    Ok(lookup(profile)?.format_struct_types)
}

/// The formats the profile defines requirements for.
pub fn get_profile_formats(profile: &ProfileProperties) -> Result<Vec<vk::Format>, Error> {
    Ok(lookup(profile)?.formats.iter().map(|f| f.format).collect())
}

/// Stamps the profile's minimum feature values into every recognized record
/// on the caller-owned chain.  Unrecognized records are left untouched.
///
/// # Safety
///
/// `chain` must be null or a valid, writable `pNext` chain of Vulkan output
/// records.
pub unsafe fn get_profile_features(
    profile: &ProfileProperties,
    chain: *mut c_void,
) -> Result<(), Error> {
    let desc = lookup(profile)?;
    unsafe { fill_chain(chain as ChainNode, desc.features.fill) };
    Ok(())
}

/// Property-record counterpart of [`get_profile_features`].
///
/// # Safety
///
/// As for [`get_profile_features`].
pub unsafe fn get_profile_properties(
    profile: &ProfileProperties,
    chain: *mut c_void,
) -> Result<(), Error> {
    let desc = lookup(profile)?;
    unsafe { fill_chain(chain as ChainNode, desc.properties.fill) };
    Ok(())
}

/// Stamps the profile's requirements for one format into the caller-owned
/// chain, then reconciles the 32-bit and 64-bit feature views so both carry
/// the union of what either expressed.  A format the profile does not define
/// leaves the chain untouched.
///
/// # Safety
///
/// As for [`get_profile_features`].
pub unsafe fn get_profile_format_properties(
    profile: &ProfileProperties,
    format: vk::Format,
    chain: *mut c_void,
) -> Result<(), Error> {
    let desc = lookup(profile)?;
    let head = chain as ChainNode;
    if let Some(entry) = desc.formats.iter().find(|f| f.format == format) {
        unsafe {
            fill_chain(head, entry.fill);
            sync_format_masks(head);
        }
    }
    Ok(())
}

/// Stamps the profile's queue-family requirements into the caller's slice,
/// one requirement per element, and returns the requirement count.  Extra
/// elements are left untouched; a short slice receives a prefix.
///
/// # Safety
///
/// Every element of `out` must be a valid, writable record chain head.
pub unsafe fn get_profile_queue_family_properties(
    profile: &ProfileProperties,
    out: &mut [vk::QueueFamilyProperties2<'static>],
) -> Result<usize, Error> {
    let desc = lookup(profile)?;
    for (req, slot) in desc.queue_families.iter().zip(out.iter_mut()) {
        unsafe { fill_chain(slot as *mut _ as ChainNode, req.fill) };
    }
    Ok(desc.queue_families.len())
}

unsafe fn fill_chain(head: ChainNode, fill: fn(&mut Record)) {
    unsafe {
        chain::walk(head, |node| {
            let mut rec = Record::from_base(node);
            fill(&mut rec);
        });
    }
}

/// Mirrors feature bits between `VkFormatProperties2` and
/// `VkFormatProperties3` records on the same chain.  The 64-bit view is
/// widened losslessly; the 32-bit view receives the truncation.
unsafe fn sync_format_masks(head: ChainNode) {
    unsafe {
        let v2 = chain::find(head, vk::StructureType::FORMAT_PROPERTIES_2);
        let v3 = chain::find(head, vk::StructureType::FORMAT_PROPERTIES_3);
        if v2.is_null() || v3.is_null() {
            return;
        }
        let v2 = &mut *(v2 as *mut vk::FormatProperties2);
        let v3 = &mut *(v3 as *mut vk::FormatProperties3);
        let p = &mut v2.format_properties;

        p.linear_tiling_features |=
            vk::FormatFeatureFlags::from_raw(v3.linear_tiling_features.as_raw() as u32);
        p.optimal_tiling_features |=
            vk::FormatFeatureFlags::from_raw(v3.optimal_tiling_features.as_raw() as u32);
        p.buffer_features |= vk::FormatFeatureFlags::from_raw(v3.buffer_features.as_raw() as u32);

        v3.linear_tiling_features |=
            vk::FormatFeatureFlags2::from_raw(u64::from(p.linear_tiling_features.as_raw()));
        v3.optimal_tiling_features |=
            vk::FormatFeatureFlags2::from_raw(u64::from(p.optimal_tiling_features.as_raw()));
        v3.buffer_features |=
            vk::FormatFeatureFlags2::from_raw(u64::from(p.buffer_features.as_raw()));
    }
}
