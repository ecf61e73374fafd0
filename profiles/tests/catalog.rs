// Copyright 2026 The vk-profiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog behavior through the public surface only.

use std::ffi::c_void;

use ash::vk;
use vk_profiles::{
    get_profile_device_extensions, get_profile_fallbacks, get_profile_feature_struct_types,
    get_profile_features, get_profile_formats, get_profile_instance_extensions, get_profiles,
    Error, ProfileProperties,
};

#[test]
fn the_catalog_lists_every_built_in_profile() {
    let profiles = get_profiles();
    let names: Vec<&str> = profiles.iter().map(|p| p.name()).collect();
    assert!(names.contains(&"VP_KHR_roadmap_2022"));
    assert!(names.contains(&"VP_KHR_roadmap_2024"));
    assert!(names.contains(&"VP_LUNARG_desktop_baseline_2023"));
    assert!(names.contains(&"VP_ANDROID_baseline_2021"));
    for profile in profiles {
        assert!(profile.spec_version >= 1);
    }
}

#[test]
fn fallbacks_point_at_catalog_entries() {
    let roadmap_2024 = ProfileProperties::new("VP_KHR_roadmap_2024", 1);
    let fallbacks = get_profile_fallbacks(&roadmap_2024).unwrap();
    assert_eq!(fallbacks.len(), 1);
    assert_eq!(fallbacks[0].name(), "VP_KHR_roadmap_2022");
    assert!(get_profiles().contains(&fallbacks[0]));
}

#[test]
fn extension_lists_are_sorted() {
    for profile in get_profiles() {
        for list in [
            get_profile_instance_extensions(profile).unwrap(),
            get_profile_device_extensions(profile).unwrap(),
        ] {
            for pair in list.windows(2) {
                assert!(pair[0].name < pair[1].name, "{}", profile.name());
            }
        }
    }
}

#[test]
fn unknown_profiles_are_rejected() {
    let bogus = ProfileProperties::new("VP_EXAMPLE_nonexistent", 1);
    assert!(matches!(
        get_profile_formats(&bogus),
        Err(Error::UnknownProfile(_))
    ));
    assert!(matches!(
        get_profile_fallbacks(&bogus),
        Err(Error::UnknownProfile(_))
    ));

    // Same name, unknown spec version: still unknown for exact queries.
    let future = ProfileProperties::new("VP_KHR_roadmap_2022", 99);
    assert!(matches!(
        get_profile_formats(&future),
        Err(Error::UnknownProfile(_))
    ));
}

#[test]
fn profile_features_fill_public_chains() {
    let roadmap_2022 = ProfileProperties::new("VP_KHR_roadmap_2022", 1);
    let types = get_profile_feature_struct_types(&roadmap_2022).unwrap();
    assert!(types.contains(&vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_3_FEATURES));

    let mut vk13 = vk::PhysicalDeviceVulkan13Features::default();
    let mut head = vk::PhysicalDeviceFeatures2::default().push_next(&mut vk13);
    unsafe { get_profile_features(&roadmap_2022, &mut head as *mut _ as *mut c_void) }.unwrap();
    assert_eq!(vk13.synchronization2, vk::TRUE);
    assert_eq!(vk13.dynamic_rendering, vk::TRUE);
}
