// Copyright 2026 The vk-profiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Support checks
//!
//! Decides whether an instance or a physical device can satisfy a profile.
//! Capability gaps come back as `Ok(false)`; `Err` is reserved for unknown
//! profiles, loader failures, and missing query entry points.
//!
//! Device-side checks run against [`DeviceQueries`], a thin seam over the
//! four `vkGetPhysicalDevice*2` entry points.  The production implementation
//! resolves them through the loader; tests substitute a mock device.

use std::ffi::CStr;

use ash::vk;

use crate::catalog;
use crate::chain::{self, ChainNode, Record};
use crate::desc::{ExtensionProperties, ProfileDesc, ProfileProperties};
use crate::Error;

/// The device-query surface a support check needs.  Chain heads arrive as
/// raw nodes so one method serves every record chain a profile builds.
pub(crate) trait DeviceQueries {
    fn extensions(&self) -> Result<Vec<vk::ExtensionProperties>, vk::Result>;
    fn api_version(&self) -> u32;
    /// # Safety
    ///
    /// `head` must be a valid `VkPhysicalDeviceFeatures2` chain.
    unsafe fn features2(&self, head: ChainNode);
    /// # Safety
    ///
    /// `head` must be a valid `VkPhysicalDeviceProperties2` chain.
    unsafe fn properties2(&self, head: ChainNode);
    /// # Safety
    ///
    /// `head` must be a valid `VkFormatProperties2` chain.
    unsafe fn format_properties2(&self, format: vk::Format, head: ChainNode);
    fn queue_family_count(&self) -> usize;
    /// # Safety
    ///
    /// Every element of `out` must be a valid `VkQueueFamilyProperties2`
    /// chain head.
    unsafe fn queue_families2(&self, out: &mut [vk::QueueFamilyProperties2<'static>]);
}

/// Loader-backed [`DeviceQueries`].  The `2`-suffixed entry points are
/// resolved by name with a KHR-suffix fallback so a 1.0 instance carrying
/// `VK_KHR_get_physical_device_properties2` works the same as a 1.1 one.
struct LoaderQueries<'a> {
    instance: &'a ash::Instance,
    physical_device: vk::PhysicalDevice,
    get_features2: vk::PFN_vkGetPhysicalDeviceFeatures2,
    get_properties2: vk::PFN_vkGetPhysicalDeviceProperties2,
    get_format_properties2: vk::PFN_vkGetPhysicalDeviceFormatProperties2,
    get_queue_family_properties2: vk::PFN_vkGetPhysicalDeviceQueueFamilyProperties2,
}

impl<'a> LoaderQueries<'a> {
    unsafe fn new(
        entry: &ash::Entry,
        instance: &'a ash::Instance,
        physical_device: vk::PhysicalDevice,
    ) -> Result<Self, Error> {
        unsafe fn resolve(
            entry: &ash::Entry,
            instance: vk::Instance,
            core: &CStr,
            khr: &CStr,
        ) -> Result<unsafe extern "system" fn(), Error> {
            unsafe { entry.get_instance_proc_addr(instance, core.as_ptr()) }
                .or_else(|| unsafe { entry.get_instance_proc_addr(instance, khr.as_ptr()) })
                .ok_or(Error::ExtensionNotPresent(
                    "VK_KHR_get_physical_device_properties2",
                ))
        }

        let handle = instance.handle();
        unsafe {
            Ok(Self {
                instance,
                physical_device,
                get_features2: std::mem::transmute(resolve(
                    entry,
                    handle,
                    c"vkGetPhysicalDeviceFeatures2",
                    c"vkGetPhysicalDeviceFeatures2KHR",
                )?),
                get_properties2: std::mem::transmute(resolve(
                    entry,
                    handle,
                    c"vkGetPhysicalDeviceProperties2",
                    c"vkGetPhysicalDeviceProperties2KHR",
                )?),
                get_format_properties2: std::mem::transmute(resolve(
                    entry,
                    handle,
                    c"vkGetPhysicalDeviceFormatProperties2",
                    c"vkGetPhysicalDeviceFormatProperties2KHR",
                )?),
                get_queue_family_properties2: std::mem::transmute(resolve(
                    entry,
                    handle,
                    c"vkGetPhysicalDeviceQueueFamilyProperties2",
                    c"vkGetPhysicalDeviceQueueFamilyProperties2KHR",
                )?),
            })
        }
    }
}

impl DeviceQueries for LoaderQueries<'_> {
    fn extensions(&self) -> Result<Vec<vk::ExtensionProperties>, vk::Result> {
        unsafe {
            self.instance
                .enumerate_device_extension_properties(self.physical_device)
        }
    }

    fn api_version(&self) -> u32 {
        unsafe {
            self.instance
                .get_physical_device_properties(self.physical_device)
                .api_version
        }
    }

    unsafe fn features2(&self, head: ChainNode) {
        unsafe { (self.get_features2)(self.physical_device, head.cast()) }
    }

    unsafe fn properties2(&self, head: ChainNode) {
        unsafe { (self.get_properties2)(self.physical_device, head.cast()) }
    }

    unsafe fn format_properties2(&self, format: vk::Format, head: ChainNode) {
        unsafe { (self.get_format_properties2)(self.physical_device, format, head.cast()) }
    }

    fn queue_family_count(&self) -> usize {
        let mut count = 0u32;
        unsafe {
            (self.get_queue_family_properties2)(
                self.physical_device,
                &mut count,
                std::ptr::null_mut(),
            )
        };
        count as usize
    }

    unsafe fn queue_families2(&self, out: &mut [vk::QueueFamilyProperties2<'static>]) {
        let mut count = out.len() as u32;
        unsafe {
            (self.get_queue_family_properties2)(
                self.physical_device,
                &mut count,
                out.as_mut_ptr(),
            )
        };
    }
}

/// Patch versions never gate profile support.
fn api_version_at_least(live: u32, required: u32) -> bool {
    (vk::api_version_major(live), vk::api_version_minor(live))
        >= (
            vk::api_version_major(required),
            vk::api_version_minor(required),
        )
}

fn extensions_present(
    available: &[vk::ExtensionProperties],
    required: &[ExtensionProperties],
) -> bool {
    required.iter().all(|req| {
        available
            .iter()
            .any(|avail| avail.extension_name_as_c_str().is_ok_and(|name| name == req.name))
    })
}

/// Resolves a support-check request: the catalog entry with the highest spec
/// version for the name, unless the caller asked for a version newer than
/// anything the catalog carries.
fn resolve_for_support(
    profile: &ProfileProperties,
) -> Result<Option<&'static ProfileDesc>, Error> {
    let desc = catalog::find_by_name(profile)
        .ok_or_else(|| Error::UnknownProfile(profile.name().to_owned()))?;
    if profile.spec_version > desc.props.spec_version {
        log::debug!(
            "{} spec version {} exceeds catalog version {}",
            profile.name(),
            profile.spec_version,
            desc.props.spec_version
        );
        return Ok(None);
    }
    Ok(Some(desc))
}

/// Whether an instance created from `entry` (optionally restricted to one
/// layer's extension set) can satisfy the profile's instance requirements.
/// Loader queries run before any rejection so their errors propagate
/// verbatim.
///
/// # Safety
///
/// `entry` must be a live loader entry.
pub unsafe fn get_instance_profile_support(
    entry: &ash::Entry,
    layer_name: Option<&CStr>,
    profile: &ProfileProperties,
) -> Result<bool, Error> {
    let api_version = unsafe { entry.try_enumerate_instance_version()? }
        .unwrap_or(vk::API_VERSION_1_0);
    let available = unsafe { entry.enumerate_instance_extension_properties(layer_name)? };
    check_instance_support(profile, api_version, &available)
}

pub(crate) fn check_instance_support(
    profile: &ProfileProperties,
    api_version: u32,
    available: &[vk::ExtensionProperties],
) -> Result<bool, Error> {
    let Some(desc) = resolve_for_support(profile)? else {
        return Ok(false);
    };

    if !api_version_at_least(api_version, desc.min_api_version) {
        log::debug!("{}: instance api version too low", profile.name());
        return Ok(false);
    }

    if !extensions_present(available, desc.instance_extensions) {
        log::debug!("{}: missing instance extension", profile.name());
        return Ok(false);
    }

    // Device-side checks need the `2`-suffixed queries, which a 1.0 instance
    // only gets through the extension.
    if vk::api_version_minor(api_version) == 0
        && vk::api_version_major(api_version) == 1
        && !available.iter().any(|avail| {
            avail
                .extension_name_as_c_str()
                .is_ok_and(|name| name == vk::KHR_GET_PHYSICAL_DEVICE_PROPERTIES2_NAME)
        })
    {
        log::debug!(
            "{}: 1.0 instance without VK_KHR_get_physical_device_properties2",
            profile.name()
        );
        return Ok(false);
    }

    Ok(true)
}

/// Whether `physical_device` satisfies the profile's device requirements:
/// extensions, API version, features, properties, per-format capabilities,
/// and an injective assignment of queue-family requirements onto distinct
/// families.  Extensions are checked before the `vkGetPhysicalDevice*2`
/// entry points are resolved, so a device that merely lacks an extension
/// answers `Ok(false)` even when the chain queries are unresolvable.
///
/// # Safety
///
/// `instance` must be live and `physical_device` must belong to it.
pub unsafe fn get_physical_device_profile_support(
    entry: &ash::Entry,
    instance: &ash::Instance,
    physical_device: vk::PhysicalDevice,
    profile: &ProfileProperties,
) -> Result<bool, Error> {
    let Some(desc) = resolve_for_support(profile)? else {
        return Ok(false);
    };

    let available =
        unsafe { instance.enumerate_device_extension_properties(physical_device)? };
    if !extensions_present(&available, desc.device_extensions) {
        log::debug!("{}: missing device extension", profile.name());
        return Ok(false);
    }

    let queries = unsafe { LoaderQueries::new(entry, instance, physical_device)? };
    Ok(check_capabilities(&queries, desc))
}

pub(crate) fn check_device_support(
    queries: &dyn DeviceQueries,
    profile: &ProfileProperties,
) -> Result<bool, Error> {
    let Some(desc) = resolve_for_support(profile)? else {
        return Ok(false);
    };

    let available = queries.extensions()?;
    if !extensions_present(&available, desc.device_extensions) {
        log::debug!("{}: missing device extension", profile.name());
        return Ok(false);
    }

    Ok(check_capabilities(queries, desc))
}

/// Post-extension device checks: version gate, then the four record-chain
/// categories.
fn check_capabilities(queries: &dyn DeviceQueries, desc: &ProfileDesc) -> bool {
    let name = desc.props.name();

    if !api_version_at_least(queries.api_version(), desc.min_api_version) {
        log::debug!("{name}: device api version too low");
        return false;
    }
    if !check_features(queries, desc) {
        log::debug!("{name}: feature requirement not met");
        return false;
    }
    if !check_properties(queries, desc) {
        log::debug!("{name}: property requirement not met");
        return false;
    }
    if !check_formats(queries, desc) {
        log::debug!("{name}: format requirement not met");
        return false;
    }
    if !check_queue_families(queries, desc) {
        log::debug!("{name}: queue family requirements not met");
        return false;
    }

    true
}

fn check_features(queries: &dyn DeviceQueries, desc: &ProfileDesc) -> bool {
    let mut satisfied = true;
    let mut features = vk::PhysicalDeviceFeatures2::default();
    unsafe {
        (desc.feature_chain)(&mut features as *mut _ as ChainNode, &mut |head| {
            queries.features2(head);
            chain::walk(head, |node| {
                satisfied &= (desc.features.compare)(&Record::from_base(node));
            });
        });
    }
    satisfied
}

fn check_properties(queries: &dyn DeviceQueries, desc: &ProfileDesc) -> bool {
    let mut satisfied = true;
    let mut properties = vk::PhysicalDeviceProperties2::default();
    unsafe {
        (desc.property_chain)(&mut properties as *mut _ as ChainNode, &mut |head| {
            queries.properties2(head);
            chain::walk(head, |node| {
                satisfied &= (desc.properties.compare)(&Record::from_base(node));
            });
        });
    }
    satisfied
}

fn check_formats(queries: &dyn DeviceQueries, desc: &ProfileDesc) -> bool {
    desc.formats.iter().all(|entry| {
        let mut satisfied = true;
        let mut properties = vk::FormatProperties2::default();
        unsafe {
            (desc.format_chain)(&mut properties as *mut _ as ChainNode, &mut |head| {
                queries.format_properties2(entry.format, head);
                chain::walk(head, |node| {
                    satisfied &= (entry.compare)(&Record::from_base(node));
                });
            });
        }
        satisfied
    })
}

fn check_queue_families(queries: &dyn DeviceQueries, desc: &ProfileDesc) -> bool {
    if desc.queue_families.is_empty() {
        return true;
    }

    let count = queries.queue_family_count();
    let mut families = vec![vk::QueueFamilyProperties2::default(); count];
    let mut matched = false;
    unsafe {
        (desc.queue_family_chain)(&mut families, &mut |families| {
            queries.queue_families2(families);

            // sat[i][j]: requirement i holds on family j, checked against
            // every record chained onto the family entry.
            let sat: Vec<Vec<bool>> = desc
                .queue_families
                .iter()
                .map(|req| {
                    families
                        .iter_mut()
                        .map(|family| {
                            let mut ok = true;
                            chain::walk(family as *mut _ as ChainNode, |node| {
                                ok &= (req.compare)(&Record::from_base(node));
                            });
                            ok
                        })
                        .collect()
                })
                .collect();
            matched = injective_assignment(&sat, count);
        });
    }
    matched
}

/// Depth-first search for an assignment of requirements to pairwise-distinct
/// families.  Requirement and family counts are both small single digits in
/// practice, so no matching machinery beyond backtracking is warranted.
fn injective_assignment(sat: &[Vec<bool>], families: usize) -> bool {
    fn assign(sat: &[Vec<bool>], req: usize, used: &mut [bool]) -> bool {
        let Some(row) = sat.get(req) else {
            return true;
        };
        for (family, ok) in row.iter().enumerate() {
            if *ok && !used[family] {
                used[family] = true;
                if assign(sat, req + 1, used) {
                    return true;
                }
                used[family] = false;
            }
        }
        false
    }
    assign(sat, 0, &mut vec![false; families])
}

#[cfg(test)]
mod test {
    use std::ffi::c_char;

    use super::*;
    use crate::desc::{CategoryDesc, ProfileDesc};
    use crate::profiles;

    fn ext(name: &CStr) -> vk::ExtensionProperties {
        let mut props = vk::ExtensionProperties {
            spec_version: 1,
            ..Default::default()
        };
        for (dst, src) in props.extension_name.iter_mut().zip(name.to_bytes_with_nul()) {
            *dst = *src as c_char;
        }
        props
    }

    /// A device whose capabilities are exactly what `desc`'s fillers stamp,
    /// with optional per-record overrides applied on top.
    struct MockDevice {
        api_version: u32,
        extensions: Vec<vk::ExtensionProperties>,
        extension_error: Option<vk::Result>,
        desc: &'static ProfileDesc,
        families: Vec<vk::QueueFamilyProperties>,
        tweak_features: Option<Box<dyn Fn(&mut Record)>>,
        tweak_properties: Option<Box<dyn Fn(&mut Record)>>,
    }

    impl MockDevice {
        fn conforming(desc: &'static ProfileDesc) -> Self {
            let families = desc
                .queue_families
                .iter()
                .map(|req| {
                    let mut family = vk::QueueFamilyProperties2::default();
                    let mut rec =
                        unsafe { Record::from_base(&mut family as *mut _ as ChainNode) };
                    (req.fill)(&mut rec);
                    family.queue_family_properties
                })
                .collect();
            Self {
                api_version: desc.min_api_version,
                extensions: desc
                    .device_extensions
                    .iter()
                    .map(|req| ext(req.name))
                    .collect(),
                extension_error: None,
                desc,
                families,
                tweak_features: None,
                tweak_properties: None,
            }
        }

        fn fill_chain(&self, head: ChainNode, fill: fn(&mut Record), tweak: &Option<Box<dyn Fn(&mut Record)>>) {
            unsafe {
                chain::walk(head, |node| {
                    let mut rec = Record::from_base(node);
                    fill(&mut rec);
                    if let Some(tweak) = tweak {
                        tweak(&mut rec);
                    }
                });
            }
        }
    }

    impl DeviceQueries for MockDevice {
        fn extensions(&self) -> Result<Vec<vk::ExtensionProperties>, vk::Result> {
            match self.extension_error {
                Some(err) => Err(err),
                None => Ok(self.extensions.clone()),
            }
        }

        fn api_version(&self) -> u32 {
            self.api_version
        }

        unsafe fn features2(&self, head: ChainNode) {
            self.fill_chain(head, self.desc.features.fill, &self.tweak_features);
        }

        unsafe fn properties2(&self, head: ChainNode) {
            self.fill_chain(head, self.desc.properties.fill, &self.tweak_properties);
        }

        unsafe fn format_properties2(&self, format: vk::Format, head: ChainNode) {
            if let Some(entry) = self.desc.formats.iter().find(|e| e.format == format) {
                self.fill_chain(head, entry.fill, &None);
            }
        }

        fn queue_family_count(&self) -> usize {
            self.families.len()
        }

        unsafe fn queue_families2(&self, out: &mut [vk::QueueFamilyProperties2<'static>]) {
            for (slot, src) in out.iter_mut().zip(&self.families) {
                slot.queue_family_properties = *src;
            }
        }
    }

    fn desktop_baseline() -> ProfileProperties {
        ProfileProperties::new("VP_LUNARG_desktop_baseline_2023", 1)
    }

    fn roadmap_2024() -> ProfileProperties {
        ProfileProperties::new("VP_KHR_roadmap_2024", 1)
    }

    fn android_baseline() -> ProfileProperties {
        ProfileProperties::new("VP_ANDROID_baseline_2021", 1)
    }

    fn android_instance_extensions() -> Vec<vk::ExtensionProperties> {
        profiles::android_baseline_2021::DESC
            .instance_extensions
            .iter()
            .map(|req| ext(req.name))
            .collect()
    }

    fn noop_fill(_: &mut Record) {}

    fn always_satisfied(_: &Record) -> bool {
        true
    }

    unsafe fn passthrough_chain(head: ChainNode, cb: &mut dyn FnMut(ChainNode)) {
        cb(head);
    }

    unsafe fn passthrough_queue_chain(
        props: &mut [vk::QueueFamilyProperties2<'static>],
        cb: &mut dyn FnMut(&mut [vk::QueueFamilyProperties2<'static>]),
    ) {
        cb(props);
    }

    static EMPTY: ProfileDesc = ProfileDesc {
        props: ProfileProperties::new("VP_TEST_empty", 1),
        min_api_version: vk::API_VERSION_1_0,
        instance_extensions: &[],
        device_extensions: &[],
        fallbacks: &[],
        features: CategoryDesc {
            struct_types: &[],
            fill: noop_fill,
            compare: always_satisfied,
        },
        properties: CategoryDesc {
            struct_types: &[],
            fill: noop_fill,
            compare: always_satisfied,
        },
        queue_families: &[],
        queue_family_struct_types: &[],
        formats: &[],
        format_struct_types: &[],
        feature_chain: passthrough_chain,
        property_chain: passthrough_chain,
        queue_family_chain: passthrough_queue_chain,
        format_chain: passthrough_chain,
    };

    #[test]
    fn a_profile_with_no_requirements_is_always_satisfied() {
        let device = MockDevice::conforming(&EMPTY);
        assert!(check_features(&device, &EMPTY));
        assert!(check_properties(&device, &EMPTY));
        assert!(check_formats(&device, &EMPTY));
        assert!(check_queue_families(&device, &EMPTY));
    }

    #[test]
    fn conforming_device_is_supported() {
        let device = MockDevice::conforming(&profiles::lunarg_desktop_baseline_2023::DESC);
        assert!(check_device_support(&device, &desktop_baseline()).unwrap());

        let device = MockDevice::conforming(&profiles::khr_roadmap_2024::DESC);
        assert!(check_device_support(&device, &roadmap_2024()).unwrap());
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let device = MockDevice::conforming(&profiles::khr_roadmap_2024::DESC);
        let bogus = ProfileProperties::new("VP_KHR_roadmap_2077", 1);
        assert!(matches!(
            check_device_support(&device, &bogus),
            Err(Error::UnknownProfile(_))
        ));
    }

    #[test]
    fn future_spec_version_is_unsupported_not_unknown() {
        let device = MockDevice::conforming(&profiles::khr_roadmap_2024::DESC);
        let future = ProfileProperties::new("VP_KHR_roadmap_2024", 9);
        assert!(!check_device_support(&device, &future).unwrap());
    }

    #[test]
    fn extension_enumeration_errors_outrank_the_version_gate() {
        let mut device = MockDevice::conforming(&profiles::lunarg_desktop_baseline_2023::DESC);
        // Both an enumeration failure and a version shortfall are present;
        // the loader error must come back verbatim, not as `Ok(false)`.
        device.api_version = vk::API_VERSION_1_0;
        device.extension_error = Some(vk::Result::ERROR_OUT_OF_HOST_MEMORY);
        assert!(matches!(
            check_device_support(&device, &desktop_baseline()),
            Err(Error::Vk(vk::Result::ERROR_OUT_OF_HOST_MEMORY))
        ));
    }

    #[test]
    fn instance_support_requires_the_extension_list() {
        let min_api = profiles::android_baseline_2021::DESC.min_api_version;
        let available = android_instance_extensions();
        assert!(check_instance_support(&android_baseline(), min_api, &available).unwrap());

        // Patch-level differences never gate support.
        let old_patch = vk::make_api_version(0, 1, 0, 0);
        assert!(check_instance_support(&android_baseline(), old_patch, &available).unwrap());

        let mut missing = available.clone();
        missing.retain(|e| {
            !e.extension_name_as_c_str()
                .is_ok_and(|name| name == vk::KHR_SURFACE_NAME)
        });
        assert!(!check_instance_support(&android_baseline(), min_api, &missing).unwrap());
    }

    #[test]
    fn a_one_zero_instance_needs_the_properties2_extension() {
        let min_api = profiles::android_baseline_2021::DESC.min_api_version;
        let mut available = android_instance_extensions();
        available.retain(|e| {
            !e.extension_name_as_c_str()
                .is_ok_and(|name| name == vk::KHR_GET_PHYSICAL_DEVICE_PROPERTIES2_NAME)
        });
        assert!(!check_instance_support(&android_baseline(), min_api, &available).unwrap());
    }

    #[test]
    fn instance_version_gate_compares_major_minor() {
        assert!(!check_instance_support(&desktop_baseline(), vk::API_VERSION_1_1, &[]).unwrap());
        // Same minor, lower patch: still supported.
        let low_patch = vk::make_api_version(0, 1, 2, 0);
        assert!(check_instance_support(&desktop_baseline(), low_patch, &[]).unwrap());
    }

    #[test]
    fn instance_support_for_unknown_profiles_is_an_error() {
        let bogus = ProfileProperties::new("VP_KHR_roadmap_2077", 1);
        assert!(matches!(
            check_instance_support(&bogus, vk::API_VERSION_1_3, &[]),
            Err(Error::UnknownProfile(_))
        ));

        // A known name at a future spec version: unsupported, not unknown.
        let future = ProfileProperties::new("VP_ANDROID_baseline_2021", 9);
        assert!(!check_instance_support(&future, vk::API_VERSION_1_3, &[]).unwrap());
    }

    #[test]
    fn missing_device_extension_fails() {
        let mut device = MockDevice::conforming(&profiles::lunarg_desktop_baseline_2023::DESC);
        device.extensions.retain(|e| {
            !e.extension_name_as_c_str()
                .is_ok_and(|name| name == vk::KHR_SWAPCHAIN_NAME)
        });
        assert!(!check_device_support(&device, &desktop_baseline()).unwrap());
    }

    #[test]
    fn api_version_compares_major_minor_only() {
        let mut device = MockDevice::conforming(&profiles::lunarg_desktop_baseline_2023::DESC);
        // Same minor, lower patch: still supported.
        device.api_version = vk::make_api_version(0, 1, 2, 0);
        assert!(check_device_support(&device, &desktop_baseline()).unwrap());

        device.api_version = vk::make_api_version(0, 1, 1, 300);
        assert!(!check_device_support(&device, &desktop_baseline()).unwrap());
    }

    #[test]
    fn missing_feature_fails() {
        let mut device = MockDevice::conforming(&profiles::lunarg_desktop_baseline_2023::DESC);
        device.tweak_features = Some(Box::new(|rec| {
            if let Record::Vulkan12Features(f) = rec {
                f.timeline_semaphore = vk::FALSE;
            }
        }));
        assert!(!check_device_support(&device, &desktop_baseline()).unwrap());
    }

    #[test]
    fn image_dimension_limit_is_a_minimum() {
        let cases = [(8192, false), (16384, true), (16385, true)];
        for (dimension, expected) in cases {
            let mut device = MockDevice::conforming(&profiles::khr_roadmap_2024::DESC);
            device.tweak_properties = Some(Box::new(move |rec| {
                if let Record::Properties2(r) = rec {
                    r.properties.limits.max_image_dimension2_d = dimension;
                }
            }));
            assert_eq!(
                check_device_support(&device, &roadmap_2024()).unwrap(),
                expected,
                "max_image_dimension2_d = {dimension}"
            );
        }
    }

    #[test]
    fn alignment_must_be_small_and_power_of_two() {
        let cases = [(48, false), (128, false), (32, true), (64, true)];
        for (alignment, expected) in cases {
            let mut device =
                MockDevice::conforming(&profiles::lunarg_desktop_baseline_2023::DESC);
            device.tweak_properties = Some(Box::new(move |rec| {
                if let Record::Properties2(r) = rec {
                    r.properties.limits.min_storage_buffer_offset_alignment = alignment;
                }
            }));
            assert_eq!(
                check_device_support(&device, &desktop_baseline()).unwrap(),
                expected,
                "min_storage_buffer_offset_alignment = {alignment}"
            );
        }
    }

    #[test]
    fn queue_family_order_does_not_matter() {
        let mut device = MockDevice::conforming(&profiles::lunarg_desktop_baseline_2023::DESC);
        device.families.reverse();
        assert!(check_device_support(&device, &desktop_baseline()).unwrap());
    }

    #[test]
    fn one_family_cannot_satisfy_two_requirements() {
        let mut device = MockDevice::conforming(&profiles::lunarg_desktop_baseline_2023::DESC);
        // The combined graphics family alone satisfies both rows of the
        // requirement matrix, but assignment must be injective.
        device.families.truncate(1);
        assert!(!check_device_support(&device, &desktop_baseline()).unwrap());
    }

    #[test]
    fn extra_families_are_fine() {
        let mut device = MockDevice::conforming(&profiles::lunarg_desktop_baseline_2023::DESC);
        device.families.insert(
            0,
            vk::QueueFamilyProperties {
                queue_flags: vk::QueueFlags::SPARSE_BINDING,
                queue_count: 1,
                ..Default::default()
            },
        );
        assert!(check_device_support(&device, &desktop_baseline()).unwrap());
    }

    #[test]
    fn injective_assignment_matrix() {
        // Two requirements, one family that satisfies both.
        assert!(!injective_assignment(
            &[vec![true], vec![true]],
            1
        ));
        // Both requirements satisfied only by family 0 of two.
        assert!(!injective_assignment(
            &[vec![true, false], vec![true, false]],
            2
        ));
        // A crossing assignment exists.
        assert!(injective_assignment(
            &[vec![true, true], vec![true, false]],
            2
        ));
        // No requirements: vacuously assignable.
        assert!(injective_assignment(&[], 0));
    }
}
