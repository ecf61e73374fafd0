// Copyright 2026 The vk-profiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Profile-aware creation
//!
//! Wraps `vkCreateInstance` and `vkCreateDevice` so a profile's requirements
//! are folded into the caller's create info before the loader sees it:
//! extension lists are merged or overridden by policy, the profile's feature
//! records are spliced onto the caller's `pNext` chain, and robust-access
//! features can be force-disabled for performance.
//!
//! Everything the profile contributes lives on this call's stack.  Nothing
//! is heap-retained past the loader call.

use std::ffi::{c_char, c_void, CStr};

use ash::vk;
use bitflags::bitflags;

use crate::catalog;
use crate::chain::{self, ChainNode, Record};
use crate::desc::{ExtensionProperties, ProfileProperties};
use crate::Error;

bitflags! {
    /// Policy flags for [`create_instance`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InstanceCreateFlags: u32 {
        /// Union the caller's extension list with the profile's.
        const MERGE_EXTENSIONS = 1 << 0;
        /// Use the caller's extension list verbatim, ignoring the profile's.
        const OVERRIDE_EXTENSIONS = 1 << 1;
    }
}

bitflags! {
    /// Policy flags for [`create_device`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DeviceCreateFlags: u32 {
        /// Union the caller's extension list with the profile's.
        const MERGE_EXTENSIONS = 1 << 0;
        /// Use the caller's extension list verbatim, ignoring the profile's.
        const OVERRIDE_EXTENSIONS = 1 << 1;
        /// Caller-chained feature records win over the profile's record of
        /// the same type.  The profile still contributes the types the
        /// caller did not chain.
        const OVERRIDE_FEATURES = 1 << 2;
        /// The profile contributes no feature records at all.
        const OVERRIDE_ALL_FEATURES = 1 << 3;
        /// Force `robustBufferAccess` (and `robustBufferAccess2`) off in the
        /// outgoing chain.
        const DISABLE_ROBUST_BUFFER_ACCESS = 1 << 4;
        /// Force `robustImageAccess` (and `robustImageAccess2`) off in the
        /// outgoing chain.
        const DISABLE_ROBUST_IMAGE_ACCESS = 1 << 5;
        /// Both robust-access disables.
        const DISABLE_ROBUST_ACCESS =
            Self::DISABLE_ROBUST_BUFFER_ACCESS.bits() | Self::DISABLE_ROBUST_IMAGE_ACCESS.bits();
    }
}

/// Caller inputs for [`create_instance`]: the profile, the plain Vulkan
/// create info, and the policy flags.
pub struct InstanceCreateInfo<'a> {
    pub profile: ProfileProperties,
    pub create_info: vk::InstanceCreateInfo<'a>,
    pub flags: InstanceCreateFlags,
}

/// Caller inputs for [`create_device`].
pub struct DeviceCreateInfo<'a> {
    pub profile: ProfileProperties,
    pub create_info: vk::DeviceCreateInfo<'a>,
    pub flags: DeviceCreateFlags,
}

/// Resolves the outgoing extension list under the merge/override policy.
/// With neither policy flag, a non-empty caller list is ambiguous and
/// rejected rather than silently merged.
unsafe fn merged_extension_list(
    caller_names: *const *const c_char,
    caller_count: u32,
    profile: &'static [ExtensionProperties],
    merge: bool,
    override_with_caller: bool,
) -> Result<Vec<*const c_char>, Error> {
    let caller: &[*const c_char] = if caller_count == 0 || caller_names.is_null() {
        &[]
    } else {
        unsafe { std::slice::from_raw_parts(caller_names, caller_count as usize) }
    };

    if override_with_caller {
        return Ok(caller.to_vec());
    }
    if !merge && !caller.is_empty() {
        return Err(Error::PolicyConflict(
            "extensions supplied without a merge or override policy",
        ));
    }

    let mut names: Vec<*const c_char> = profile.iter().map(|ext| ext.name.as_ptr()).collect();
    for &ptr in caller {
        let name = unsafe { CStr::from_ptr(ptr) };
        if !profile.iter().any(|ext| ext.name == name) {
            names.push(ptr);
        }
    }
    Ok(names)
}

unsafe fn list_contains(names: &[*const c_char], name: &CStr) -> bool {
    names
        .iter()
        .any(|&ptr| unsafe { CStr::from_ptr(ptr) } == name)
}

/// Builds the outgoing `VkInstanceCreateInfo` and hands it to `f` while the
/// profile's contributions are still live on this stack frame.
pub(crate) unsafe fn with_instance_create_info<R>(
    loader_version: u32,
    info: &InstanceCreateInfo,
    f: impl FnOnce(&vk::InstanceCreateInfo) -> R,
) -> Result<R, Error> {
    let desc = catalog::lookup(&info.profile)
        .ok_or_else(|| Error::UnknownProfile(info.profile.name().to_owned()))?;

    let mut extensions = unsafe {
        merged_extension_list(
            info.create_info.pp_enabled_extension_names,
            info.create_info.enabled_extension_count,
            desc.instance_extensions,
            info.flags.contains(InstanceCreateFlags::MERGE_EXTENSIONS),
            info.flags.contains(InstanceCreateFlags::OVERRIDE_EXTENSIONS),
        )?
    };

    // Device support checks need the `2`-suffixed queries; on a 1.0 loader
    // they only exist behind the extension.
    if vk::api_version_major(loader_version) == 1
        && vk::api_version_minor(loader_version) == 0
        && !unsafe { list_contains(&extensions, vk::KHR_GET_PHYSICAL_DEVICE_PROPERTIES2_NAME) }
    {
        extensions.push(vk::KHR_GET_PHYSICAL_DEVICE_PROPERTIES2_NAME.as_ptr());
    }

    let mut out = info.create_info;
    if unsafe { list_contains(&extensions, vk::KHR_PORTABILITY_ENUMERATION_NAME) } {
        out.flags |= vk::InstanceCreateFlags::ENUMERATE_PORTABILITY_KHR;
    }

    // A caller-supplied application info passes through untouched; only a
    // missing one is synthesized, asking for the profile's minimum.
    let app_info = vk::ApplicationInfo {
        api_version: desc.min_api_version,
        ..Default::default()
    };
    if out.p_application_info.is_null() {
        out.p_application_info = &app_info;
    }
    out.enabled_extension_count = extensions.len() as u32;
    out.pp_enabled_extension_names = extensions.as_ptr();
    Ok(f(&out))
}

/// Creates an instance satisfying the profile's instance requirements.
///
/// # Safety
///
/// `info.create_info` and everything it points at must be valid for the
/// duration of the call.
pub unsafe fn create_instance(
    entry: &ash::Entry,
    info: &InstanceCreateInfo,
    allocation_callbacks: Option<&vk::AllocationCallbacks>,
) -> Result<ash::Instance, Error> {
    let loader_version =
        unsafe { entry.try_enumerate_instance_version()? }.unwrap_or(vk::API_VERSION_1_0);
    unsafe {
        with_instance_create_info(loader_version, info, |create_info| {
            entry.create_instance(create_info, allocation_callbacks)
        })?
        .map_err(Error::from)
    }
}

unsafe fn apply_robust_disables(head: ChainNode, flags: DeviceCreateFlags) {
    let disable_buffer = flags.contains(DeviceCreateFlags::DISABLE_ROBUST_BUFFER_ACCESS);
    let disable_image = flags.contains(DeviceCreateFlags::DISABLE_ROBUST_IMAGE_ACCESS);
    if !disable_buffer && !disable_image {
        return;
    }
    unsafe {
        chain::walk(head, |node| match Record::from_base(node) {
            Record::Features2(r) => {
                if disable_buffer {
                    r.features.robust_buffer_access = vk::FALSE;
                }
            }
            Record::Robustness2Features(r) => {
                if disable_buffer {
                    r.robust_buffer_access2 = vk::FALSE;
                }
                if disable_image {
                    r.robust_image_access2 = vk::FALSE;
                }
            }
            Record::ImageRobustnessFeatures(r) => {
                if disable_image {
                    r.robust_image_access = vk::FALSE;
                }
            }
            Record::Vulkan13Features(r) => {
                if disable_image {
                    r.robust_image_access = vk::FALSE;
                }
            }
            _ => {}
        });
    }
}

/// Final assembly: reconcile `pEnabledFeatures` with a chained
/// `VkPhysicalDeviceFeatures2`, apply the robust-access disables, and run
/// `f` on the outgoing create info.
unsafe fn assemble_device_create_info<R>(
    info: &DeviceCreateInfo,
    extensions: &[*const c_char],
    head: ChainNode,
    f: impl FnOnce(&vk::DeviceCreateInfo) -> R,
) -> R {
    let mut p_enabled_features = info.create_info.p_enabled_features;
    let mut features_storage = vk::PhysicalDeviceFeatures::default();

    let features2 = unsafe { chain::find(head, vk::StructureType::PHYSICAL_DEVICE_FEATURES_2) };
    if !features2.is_null() {
        // Chaining Features2 and passing pEnabledFeatures together is
        // invalid Vulkan; fold the legacy struct into the record.
        if !p_enabled_features.is_null() {
            unsafe {
                if let Record::Features2(r) = Record::from_base(features2) {
                    r.features = *p_enabled_features;
                }
            }
        }
        p_enabled_features = std::ptr::null();
    } else if !p_enabled_features.is_null()
        && info
            .flags
            .contains(DeviceCreateFlags::DISABLE_ROBUST_BUFFER_ACCESS)
    {
        features_storage = unsafe { *p_enabled_features };
        features_storage.robust_buffer_access = vk::FALSE;
        p_enabled_features = &features_storage;
    }

    unsafe { apply_robust_disables(head, info.flags) };

    let mut out = info.create_info;
    out.p_next = if head.is_null() {
        std::ptr::null()
    } else {
        head as *const c_void
    };
    out.enabled_extension_count = extensions.len() as u32;
    out.pp_enabled_extension_names = extensions.as_ptr();
    out.p_enabled_features = p_enabled_features;
    f(&out)
}

/// Builds the outgoing `VkDeviceCreateInfo` under the profile's feature and
/// extension policy and hands it to `f` while the profile's stack-owned
/// feature records are still live.
pub(crate) unsafe fn with_device_create_info<R>(
    info: &DeviceCreateInfo,
    f: impl FnOnce(&vk::DeviceCreateInfo) -> R,
) -> Result<R, Error> {
    let desc = catalog::lookup(&info.profile)
        .ok_or_else(|| Error::UnknownProfile(info.profile.name().to_owned()))?;

    let extensions = unsafe {
        merged_extension_list(
            info.create_info.pp_enabled_extension_names,
            info.create_info.enabled_extension_count,
            desc.device_extensions,
            info.flags.contains(DeviceCreateFlags::MERGE_EXTENSIONS),
            info.flags.contains(DeviceCreateFlags::OVERRIDE_EXTENSIONS),
        )?
    };

    let caller_head = info.create_info.p_next as ChainNode;

    // Chaining a Features2 record and passing pEnabledFeatures together is
    // invalid Vulkan regardless of policy; there can be only one source of
    // the core feature set.
    if !info.create_info.p_enabled_features.is_null()
        && !unsafe { chain::find(caller_head, vk::StructureType::PHYSICAL_DEVICE_FEATURES_2) }
            .is_null()
    {
        return Err(Error::PolicyConflict(
            "pEnabledFeatures and a chained VkPhysicalDeviceFeatures2 cannot both be supplied",
        ));
    }

    let overrides = info.flags.intersects(
        DeviceCreateFlags::OVERRIDE_FEATURES | DeviceCreateFlags::OVERRIDE_ALL_FEATURES,
    );

    if !overrides {
        let mut conflict = false;
        unsafe {
            chain::walk(caller_head, |node| {
                conflict |= desc.features.struct_types.contains(&(*node).s_type);
            });
        }
        if !info.create_info.p_enabled_features.is_null()
            && desc
                .features
                .struct_types
                .contains(&vk::StructureType::PHYSICAL_DEVICE_FEATURES_2)
        {
            conflict = true;
        }
        if conflict {
            return Err(Error::PolicyConflict(
                "caller supplied a feature record the profile defines without an override policy",
            ));
        }
    }

    if info.flags.contains(DeviceCreateFlags::OVERRIDE_ALL_FEATURES)
        || desc.features.struct_types.is_empty()
    {
        return Ok(unsafe { assemble_device_create_info(info, &extensions, caller_head, f) });
    }

    let mut result = None;
    let mut f = Some(f);
    let mut scratch_head = vk::PhysicalDeviceFeatures2::default();
    unsafe {
        (desc.feature_chain)(&mut scratch_head as *mut _ as ChainNode, &mut |scratch| {
            chain::walk(scratch, |node| {
                let mut rec = Record::from_base(node);
                (desc.features.fill)(&mut rec);
            });

            // Keep the scratch records the caller's chain does not already
            // carry, then splice them ahead of the caller's chain.
            let mut kept: Vec<ChainNode> = Vec::new();
            chain::walk(scratch, |node| {
                if chain::find(caller_head, (*node).s_type).is_null() {
                    kept.push(node);
                }
            });
            for pair in kept.windows(2) {
                (*pair[0]).p_next = pair[1];
            }
            if let Some(&last) = kept.last() {
                (*last).p_next = caller_head;
            }
            let head = kept.first().copied().unwrap_or(caller_head);
            log::trace!(
                "{}: spliced {} profile feature record(s) ahead of the caller's chain",
                info.profile.name(),
                kept.len()
            );

            if let Some(f) = f.take() {
                result = Some(assemble_device_create_info(info, &extensions, head, f));
            }
        });
    }
    let Some(result) = result else {
        // ChainBuilder runs its continuation exactly once.
        unreachable!("feature chain builder did not run its continuation");
    };
    Ok(result)
}

/// Creates a device enabling the profile's extensions and features on top of
/// whatever the caller asked for.
///
/// # Safety
///
/// `info.create_info` and everything it points at must be valid for the
/// duration of the call, and any records on its `pNext` chain must be
/// writable: the robust-access disables and `pEnabledFeatures` folding
/// mutate them in place.
pub unsafe fn create_device(
    instance: &ash::Instance,
    physical_device: vk::PhysicalDevice,
    info: &DeviceCreateInfo,
    allocation_callbacks: Option<&vk::AllocationCallbacks>,
) -> Result<ash::Device, Error> {
    unsafe {
        with_device_create_info(info, |create_info| {
            instance.create_device(physical_device, create_info, allocation_callbacks)
        })?
        .map_err(Error::from)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn desktop_baseline() -> ProfileProperties {
        ProfileProperties::new("VP_LUNARG_desktop_baseline_2023", 1)
    }

    fn roadmap_2022() -> ProfileProperties {
        ProfileProperties::new("VP_KHR_roadmap_2022", 1)
    }

    unsafe fn extension_names(create_info_names: *const *const c_char, count: u32) -> Vec<String> {
        unsafe {
            std::slice::from_raw_parts(create_info_names, count as usize)
                .iter()
                .map(|&ptr| CStr::from_ptr(ptr).to_string_lossy().into_owned())
                .collect()
        }
    }

    unsafe fn chain_types(head: *const c_void) -> Vec<vk::StructureType> {
        let mut types = Vec::new();
        unsafe {
            chain::walk(head as ChainNode, |node| types.push((*node).s_type));
        }
        types
    }

    #[test]
    fn device_extensions_default_to_the_profile_list() {
        let info = DeviceCreateInfo {
            profile: desktop_baseline(),
            create_info: vk::DeviceCreateInfo::default(),
            flags: DeviceCreateFlags::empty(),
        };
        let names = unsafe {
            with_device_create_info(&info, |ci| {
                extension_names(ci.pp_enabled_extension_names, ci.enabled_extension_count)
            })
        }
        .unwrap();
        assert_eq!(
            names,
            vec![
                "VK_EXT_image_robustness",
                "VK_KHR_dynamic_rendering",
                "VK_KHR_swapchain",
                "VK_KHR_synchronization2",
            ]
        );
    }

    #[test]
    fn caller_extensions_without_policy_conflict() {
        let caller = [vk::KHR_SWAPCHAIN_NAME.as_ptr()];
        let info = DeviceCreateInfo {
            profile: desktop_baseline(),
            create_info: vk::DeviceCreateInfo {
                enabled_extension_count: 1,
                pp_enabled_extension_names: caller.as_ptr(),
                ..Default::default()
            },
            flags: DeviceCreateFlags::empty(),
        };
        let result = unsafe { with_device_create_info(&info, |_| ()) };
        assert!(matches!(result, Err(Error::PolicyConflict(_))));
    }

    #[test]
    fn merge_extensions_unions_and_deduplicates() {
        let caller = [
            vk::KHR_SWAPCHAIN_NAME.as_ptr(),
            vk::EXT_DEBUG_MARKER_NAME.as_ptr(),
        ];
        let info = DeviceCreateInfo {
            profile: desktop_baseline(),
            create_info: vk::DeviceCreateInfo {
                enabled_extension_count: caller.len() as u32,
                pp_enabled_extension_names: caller.as_ptr(),
                ..Default::default()
            },
            flags: DeviceCreateFlags::MERGE_EXTENSIONS,
        };
        let names = unsafe {
            with_device_create_info(&info, |ci| {
                extension_names(ci.pp_enabled_extension_names, ci.enabled_extension_count)
            })
        }
        .unwrap();
        assert_eq!(names.len(), 5);
        assert_eq!(
            names.iter().filter(|n| *n == "VK_KHR_swapchain").count(),
            1
        );
        assert!(names.contains(&"VK_EXT_debug_marker".to_owned()));
    }

    #[test]
    fn override_extensions_keeps_the_caller_list() {
        let caller = [vk::EXT_DEBUG_MARKER_NAME.as_ptr()];
        let info = DeviceCreateInfo {
            profile: desktop_baseline(),
            create_info: vk::DeviceCreateInfo {
                enabled_extension_count: 1,
                pp_enabled_extension_names: caller.as_ptr(),
                ..Default::default()
            },
            flags: DeviceCreateFlags::OVERRIDE_EXTENSIONS,
        };
        let names = unsafe {
            with_device_create_info(&info, |ci| {
                extension_names(ci.pp_enabled_extension_names, ci.enabled_extension_count)
            })
        }
        .unwrap();
        assert_eq!(names, vec!["VK_EXT_debug_marker"]);
    }

    #[test]
    fn profile_features_are_spliced_onto_an_empty_chain() {
        let info = DeviceCreateInfo {
            profile: desktop_baseline(),
            create_info: vk::DeviceCreateInfo::default(),
            flags: DeviceCreateFlags::empty(),
        };
        unsafe {
            with_device_create_info(&info, |ci| {
                assert!(ci.p_enabled_features.is_null());
                let types = chain_types(ci.p_next);
                assert_eq!(
                    types,
                    vec![
                        vk::StructureType::PHYSICAL_DEVICE_FEATURES_2,
                        vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_1_FEATURES,
                        vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
                        vk::StructureType::PHYSICAL_DEVICE_DYNAMIC_RENDERING_FEATURES,
                        vk::StructureType::PHYSICAL_DEVICE_SYNCHRONIZATION_2_FEATURES,
                        vk::StructureType::PHYSICAL_DEVICE_IMAGE_ROBUSTNESS_FEATURES,
                    ]
                );
                let head = &*(ci.p_next as *const vk::PhysicalDeviceFeatures2);
                assert_eq!(head.features.robust_buffer_access, vk::TRUE);
                assert_eq!(head.features.sampler_anisotropy, vk::TRUE);
            })
        }
        .unwrap();
    }

    #[test]
    fn caller_feature_record_requires_an_override_policy() {
        let mut vk12 = vk::PhysicalDeviceVulkan12Features::default();
        let info = DeviceCreateInfo {
            profile: desktop_baseline(),
            create_info: vk::DeviceCreateInfo::default().push_next(&mut vk12),
            flags: DeviceCreateFlags::empty(),
        };
        let result = unsafe { with_device_create_info(&info, |_| ()) };
        assert!(matches!(result, Err(Error::PolicyConflict(_))));
    }

    #[test]
    fn override_features_keeps_the_caller_record() {
        let mut vk12 = vk::PhysicalDeviceVulkan12Features {
            timeline_semaphore: vk::FALSE,
            ..Default::default()
        };
        let caller_record = &mut vk12 as *mut _ as ChainNode;
        let info = DeviceCreateInfo {
            profile: desktop_baseline(),
            create_info: vk::DeviceCreateInfo::default().push_next(&mut vk12),
            flags: DeviceCreateFlags::OVERRIDE_FEATURES,
        };
        unsafe {
            with_device_create_info(&info, |ci| {
                let head = ci.p_next as ChainNode;
                let found = chain::find(
                    head,
                    vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
                );
                assert_eq!(found, caller_record);
                let record = &*(found as *const vk::PhysicalDeviceVulkan12Features);
                assert_eq!(record.timeline_semaphore, vk::FALSE);
                // The profile still contributes the records the caller did
                // not chain.
                assert!(!chain::find(head, vk::StructureType::PHYSICAL_DEVICE_FEATURES_2)
                    .is_null());
            })
        }
        .unwrap();
    }

    #[test]
    fn robust_buffer_access_disable_reaches_caller_records() {
        let mut robustness2 = vk::PhysicalDeviceRobustness2FeaturesEXT {
            robust_buffer_access2: vk::TRUE,
            robust_image_access2: vk::TRUE,
            ..Default::default()
        };
        let info = DeviceCreateInfo {
            profile: desktop_baseline(),
            create_info: vk::DeviceCreateInfo::default().push_next(&mut robustness2),
            flags: DeviceCreateFlags::DISABLE_ROBUST_BUFFER_ACCESS,
        };
        unsafe {
            with_device_create_info(&info, |ci| {
                let head = ci.p_next as ChainNode;
                let features2 =
                    chain::find(head, vk::StructureType::PHYSICAL_DEVICE_FEATURES_2);
                let features2 = &*(features2 as *const vk::PhysicalDeviceFeatures2);
                // The profile's fill sets it; the disable wins.
                assert_eq!(features2.features.robust_buffer_access, vk::FALSE);
            })
        }
        .unwrap();
        assert_eq!(robustness2.robust_buffer_access2, vk::FALSE);
        assert_eq!(robustness2.robust_image_access2, vk::TRUE);
    }

    #[test]
    fn robust_image_access_disable_clears_the_profile_record() {
        let info = DeviceCreateInfo {
            profile: desktop_baseline(),
            create_info: vk::DeviceCreateInfo::default(),
            flags: DeviceCreateFlags::DISABLE_ROBUST_IMAGE_ACCESS,
        };
        unsafe {
            with_device_create_info(&info, |ci| {
                let found = chain::find(
                    ci.p_next as ChainNode,
                    vk::StructureType::PHYSICAL_DEVICE_IMAGE_ROBUSTNESS_FEATURES,
                );
                let record = &*(found as *const vk::PhysicalDeviceImageRobustnessFeatures);
                assert_eq!(record.robust_image_access, vk::FALSE);
            })
        }
        .unwrap();
    }

    #[test]
    fn enabled_features_and_a_chained_features2_record_conflict() {
        let legacy = vk::PhysicalDeviceFeatures::default();
        let mut features2 = vk::PhysicalDeviceFeatures2::default();
        let info = DeviceCreateInfo {
            profile: desktop_baseline(),
            create_info: vk::DeviceCreateInfo {
                p_enabled_features: &legacy,
                ..Default::default()
            }
            .push_next(&mut features2),
            flags: DeviceCreateFlags::OVERRIDE_ALL_FEATURES,
        };
        let result = unsafe { with_device_create_info(&info, |_| ()) };
        assert!(matches!(result, Err(Error::PolicyConflict(_))));
    }

    #[test]
    fn override_all_features_passes_the_caller_chain_through() {
        let mut vk12 = vk::PhysicalDeviceVulkan12Features::default();
        let caller_record = &mut vk12 as *mut _ as ChainNode;
        let info = DeviceCreateInfo {
            profile: desktop_baseline(),
            create_info: vk::DeviceCreateInfo::default().push_next(&mut vk12),
            flags: DeviceCreateFlags::OVERRIDE_ALL_FEATURES,
        };
        unsafe {
            with_device_create_info(&info, |ci| {
                assert_eq!(ci.p_next as ChainNode, caller_record);
                assert_eq!(
                    chain_types(ci.p_next),
                    vec![vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES]
                );
            })
        }
        .unwrap();
    }

    #[test]
    fn enabled_features_fold_into_the_features2_record() {
        let legacy = vk::PhysicalDeviceFeatures {
            geometry_shader: vk::TRUE,
            ..Default::default()
        };
        let info = DeviceCreateInfo {
            profile: desktop_baseline(),
            create_info: vk::DeviceCreateInfo {
                p_enabled_features: &legacy,
                ..Default::default()
            },
            flags: DeviceCreateFlags::OVERRIDE_FEATURES,
        };
        unsafe {
            with_device_create_info(&info, |ci| {
                assert!(ci.p_enabled_features.is_null());
                let features2 = chain::find(
                    ci.p_next as ChainNode,
                    vk::StructureType::PHYSICAL_DEVICE_FEATURES_2,
                );
                let features2 = &*(features2 as *const vk::PhysicalDeviceFeatures2);
                assert_eq!(features2.features.geometry_shader, vk::TRUE);
                assert_eq!(features2.features.sampler_anisotropy, vk::FALSE);
            })
        }
        .unwrap();
    }

    #[test]
    fn legacy_features_survive_override_all_with_robust_disable() {
        let legacy = vk::PhysicalDeviceFeatures {
            robust_buffer_access: vk::TRUE,
            geometry_shader: vk::TRUE,
            ..Default::default()
        };
        let info = DeviceCreateInfo {
            profile: desktop_baseline(),
            create_info: vk::DeviceCreateInfo {
                p_enabled_features: &legacy,
                ..Default::default()
            },
            flags: DeviceCreateFlags::OVERRIDE_ALL_FEATURES
                | DeviceCreateFlags::DISABLE_ROBUST_BUFFER_ACCESS,
        };
        unsafe {
            with_device_create_info(&info, |ci| {
                assert!(ci.p_next.is_null());
                let features = &*ci.p_enabled_features;
                assert_eq!(features.robust_buffer_access, vk::FALSE);
                assert_eq!(features.geometry_shader, vk::TRUE);
            })
        }
        .unwrap();
    }

    #[test]
    fn instance_extensions_default_to_the_profile_list() {
        let info = InstanceCreateInfo {
            profile: ProfileProperties::new("VP_ANDROID_baseline_2021", 1),
            create_info: vk::InstanceCreateInfo::default(),
            flags: InstanceCreateFlags::empty(),
        };
        let names = unsafe {
            with_instance_create_info(vk::API_VERSION_1_1, &info, |ci| {
                extension_names(ci.pp_enabled_extension_names, ci.enabled_extension_count)
            })
        }
        .unwrap();
        assert!(names.contains(&"VK_KHR_surface".to_owned()));
        assert!(names.contains(&"VK_KHR_android_surface".to_owned()));
        assert_eq!(
            names
                .iter()
                .filter(|n| *n == "VK_KHR_get_physical_device_properties2")
                .count(),
            1
        );
    }

    #[test]
    fn a_one_zero_loader_gets_the_properties2_extension() {
        let info = InstanceCreateInfo {
            profile: desktop_baseline(),
            create_info: vk::InstanceCreateInfo::default(),
            flags: InstanceCreateFlags::empty(),
        };
        let names = unsafe {
            with_instance_create_info(vk::API_VERSION_1_0, &info, |ci| {
                extension_names(ci.pp_enabled_extension_names, ci.enabled_extension_count)
            })
        }
        .unwrap();
        assert_eq!(names, vec!["VK_KHR_get_physical_device_properties2"]);

        let names = unsafe {
            with_instance_create_info(vk::API_VERSION_1_3, &info, |ci| {
                extension_names(ci.pp_enabled_extension_names, ci.enabled_extension_count)
            })
        }
        .unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn application_info_is_synthesized_only_when_absent() {
        let info = InstanceCreateInfo {
            profile: roadmap_2022(),
            create_info: vk::InstanceCreateInfo::default(),
            flags: InstanceCreateFlags::empty(),
        };
        unsafe {
            with_instance_create_info(vk::API_VERSION_1_3, &info, |ci| {
                assert!(!ci.p_application_info.is_null());
                assert_eq!(
                    (*ci.p_application_info).api_version,
                    vk::make_api_version(0, 1, 3, 204)
                );
            })
        }
        .unwrap();

        // A caller-supplied record is forwarded untouched, even when it
        // targets an API version below the profile minimum.
        let app_info = vk::ApplicationInfo {
            api_version: vk::API_VERSION_1_1,
            ..Default::default()
        };
        let info = InstanceCreateInfo {
            profile: roadmap_2022(),
            create_info: vk::InstanceCreateInfo {
                p_application_info: &app_info,
                ..Default::default()
            },
            flags: InstanceCreateFlags::empty(),
        };
        unsafe {
            with_instance_create_info(vk::API_VERSION_1_3, &info, |ci| {
                assert_eq!(ci.p_application_info, &app_info as *const _);
                assert_eq!((*ci.p_application_info).api_version, vk::API_VERSION_1_1);
            })
        }
        .unwrap();
    }

    #[test]
    fn portability_enumeration_sets_the_instance_flag() {
        let caller = [vk::KHR_PORTABILITY_ENUMERATION_NAME.as_ptr()];
        let info = InstanceCreateInfo {
            profile: desktop_baseline(),
            create_info: vk::InstanceCreateInfo {
                enabled_extension_count: 1,
                pp_enabled_extension_names: caller.as_ptr(),
                ..Default::default()
            },
            flags: InstanceCreateFlags::MERGE_EXTENSIONS,
        };
        unsafe {
            with_instance_create_info(vk::API_VERSION_1_3, &info, |ci| {
                assert!(ci
                    .flags
                    .contains(vk::InstanceCreateFlags::ENUMERATE_PORTABILITY_KHR));
            })
        }
        .unwrap();
    }
}
