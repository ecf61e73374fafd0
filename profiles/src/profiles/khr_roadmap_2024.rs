// Copyright 2026 The vk-profiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `VP_KHR_roadmap_2024`: the 2024 roadmap milestone.  Supersets the 2022
//! profile (which the catalog lists as its fallback) and adds a pair of
//! device extensions plus baseline sampled-format guarantees expressed
//! through both the 32-bit and 64-bit format-feature views.

use ash::vk;

use crate::chain::{self, ChainNode, Record};
use crate::compare;
use crate::desc::{CategoryDesc, ExtensionProperties, FormatDesc, ProfileDesc, ProfileProperties};

pub(crate) const PROPS: ProfileProperties = ProfileProperties::new("VP_KHR_roadmap_2024", 1);

static DEVICE_EXTENSIONS: &[ExtensionProperties] = &[
    ExtensionProperties::new(vk::KHR_GLOBAL_PRIORITY_NAME, 1),
    ExtensionProperties::new(vk::KHR_LOAD_STORE_OP_NONE_NAME, 1),
];

static FALLBACKS: &[ProfileProperties] = &[super::khr_roadmap_2022::PROPS];

static FEATURE_STRUCT_TYPES: &[vk::StructureType] = &[
    vk::StructureType::PHYSICAL_DEVICE_FEATURES_2,
    vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_1_FEATURES,
    vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
    vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_3_FEATURES,
];

static PROPERTY_STRUCT_TYPES: &[vk::StructureType] = &[
    vk::StructureType::PHYSICAL_DEVICE_PROPERTIES_2,
    vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_1_PROPERTIES,
    vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_3_PROPERTIES,
];

static FORMAT_STRUCT_TYPES: &[vk::StructureType] = &[
    vk::StructureType::FORMAT_PROPERTIES_2,
    vk::StructureType::FORMAT_PROPERTIES_3,
];

fn fill_features(rec: &mut Record) {
    // Everything the 2022 milestone requires, plus the 2024 additions.
    super::khr_roadmap_2022::fill_features(rec);
    match rec {
        Record::Features2(r) => {
            let f = &mut r.features;
            f.multi_draw_indirect = vk::TRUE;
            f.shader_image_gather_extended = vk::TRUE;
            f.shader_int16 = vk::TRUE;
        }
        Record::Vulkan12Features(f) => {
            f.shader_int8 = vk::TRUE;
            f.storage_buffer8_bit_access = vk::TRUE;
        }
        _ => {}
    }
}

fn compare_features(rec: &Record) -> bool {
    if !super::khr_roadmap_2022::compare_features(rec) {
        return false;
    }
    match rec {
        Record::Features2(r) => {
            let f = &r.features;
            compare::feature(f.multi_draw_indirect)
                && compare::feature(f.shader_image_gather_extended)
                && compare::feature(f.shader_int16)
        }
        Record::Vulkan12Features(f) => {
            compare::feature(f.shader_int8) && compare::feature(f.storage_buffer8_bit_access)
        }
        _ => true,
    }
}

fn fill_properties(rec: &mut Record) {
    match rec {
        Record::Properties2(r) => {
            let l = &mut r.properties.limits;
            l.max_image_dimension2_d = 16384;
            l.max_image_dimension_cube = 16384;
            l.max_color_attachments = 8;
            l.max_bound_descriptor_sets = 7;
            l.max_per_stage_descriptor_samplers = 64;
            l.max_per_stage_descriptor_uniform_buffers = 15;
            l.max_per_stage_descriptor_storage_buffers = 30;
            l.timestamp_compute_and_graphics = vk::TRUE;
            l.min_uniform_buffer_offset_alignment = 256;
            l.min_storage_buffer_offset_alignment = 64;
        }
        Record::Vulkan11Properties(p) => {
            p.subgroup_size = 4;
            p.subgroup_supported_stages =
                vk::ShaderStageFlags::COMPUTE | vk::ShaderStageFlags::FRAGMENT;
            p.subgroup_supported_operations = vk::SubgroupFeatureFlags::BASIC
                | vk::SubgroupFeatureFlags::VOTE
                | vk::SubgroupFeatureFlags::ARITHMETIC
                | vk::SubgroupFeatureFlags::BALLOT
                | vk::SubgroupFeatureFlags::SHUFFLE
                | vk::SubgroupFeatureFlags::SHUFFLE_RELATIVE
                | vk::SubgroupFeatureFlags::QUAD;
        }
        Record::Vulkan13Properties(p) => {
            p.min_subgroup_size = 4;
            p.max_subgroup_size = 4;
            p.max_buffer_size = 2147483648;
        }
        _ => {}
    }
}

fn compare_properties(rec: &Record) -> bool {
    match rec {
        Record::Properties2(r) => {
            let l = &r.properties.limits;
            compare::gte(l.max_image_dimension2_d, 16384)
                && compare::gte(l.max_image_dimension_cube, 16384)
                && compare::gte(l.max_color_attachments, 8)
                && compare::gte(l.max_bound_descriptor_sets, 7)
                && compare::gte(l.max_per_stage_descriptor_samplers, 64)
                && compare::gte(l.max_per_stage_descriptor_uniform_buffers, 15)
                && compare::gte(l.max_per_stage_descriptor_storage_buffers, 30)
                && compare::feature(l.timestamp_compute_and_graphics)
                && compare::aligned(l.min_uniform_buffer_offset_alignment, 256)
                && compare::aligned(l.min_storage_buffer_offset_alignment, 64)
        }
        Record::Vulkan11Properties(p) => {
            compare::gte(p.subgroup_size, 4)
                && p.subgroup_supported_stages
                    .contains(vk::ShaderStageFlags::COMPUTE | vk::ShaderStageFlags::FRAGMENT)
                && p.subgroup_supported_operations.contains(
                    vk::SubgroupFeatureFlags::BASIC
                        | vk::SubgroupFeatureFlags::VOTE
                        | vk::SubgroupFeatureFlags::ARITHMETIC
                        | vk::SubgroupFeatureFlags::BALLOT
                        | vk::SubgroupFeatureFlags::SHUFFLE
                        | vk::SubgroupFeatureFlags::SHUFFLE_RELATIVE
                        | vk::SubgroupFeatureFlags::QUAD,
                )
        }
        Record::Vulkan13Properties(p) => {
            compare::lte(p.min_subgroup_size, 4)
                && compare::gte(p.max_subgroup_size, 4)
                && compare::gte(p.max_buffer_size, 2147483648)
        }
        _ => true,
    }
}

const SAMPLED_V1: vk::FormatFeatureFlags = vk::FormatFeatureFlags::from_raw(
    vk::FormatFeatureFlags::SAMPLED_IMAGE.as_raw()
        | vk::FormatFeatureFlags::SAMPLED_IMAGE_FILTER_LINEAR.as_raw()
        | vk::FormatFeatureFlags::TRANSFER_SRC.as_raw()
        | vk::FormatFeatureFlags::TRANSFER_DST.as_raw()
        | vk::FormatFeatureFlags::BLIT_SRC.as_raw()
        | vk::FormatFeatureFlags::BLIT_DST.as_raw(),
);

const SAMPLED_V3: vk::FormatFeatureFlags2 = vk::FormatFeatureFlags2::from_raw(
    vk::FormatFeatureFlags2::SAMPLED_IMAGE.as_raw()
        | vk::FormatFeatureFlags2::SAMPLED_IMAGE_FILTER_LINEAR.as_raw()
        | vk::FormatFeatureFlags2::TRANSFER_SRC.as_raw()
        | vk::FormatFeatureFlags2::TRANSFER_DST.as_raw()
        | vk::FormatFeatureFlags2::BLIT_SRC.as_raw()
        | vk::FormatFeatureFlags2::BLIT_DST.as_raw()
        | vk::FormatFeatureFlags2::STORAGE_READ_WITHOUT_FORMAT.as_raw(),
);

fn fill_format_sampled(rec: &mut Record) {
    match rec {
        Record::FormatProperties2(r) => {
            r.format_properties.optimal_tiling_features = SAMPLED_V1;
        }
        Record::FormatProperties3(r) => {
            r.optimal_tiling_features = SAMPLED_V3;
        }
        _ => {}
    }
}

fn compare_format_sampled(rec: &Record) -> bool {
    match rec {
        Record::FormatProperties2(r) => r
            .format_properties
            .optimal_tiling_features
            .contains(SAMPLED_V1),
        Record::FormatProperties3(r) => r.optimal_tiling_features.contains(SAMPLED_V3),
        _ => true,
    }
}

static FORMATS: &[FormatDesc] = &[
    FormatDesc {
        format: vk::Format::R8_UNORM,
        fill: fill_format_sampled,
        compare: compare_format_sampled,
    },
    FormatDesc {
        format: vk::Format::R8G8_UNORM,
        fill: fill_format_sampled,
        compare: compare_format_sampled,
    },
];

unsafe fn feature_chain(head: ChainNode, cb: &mut dyn FnMut(ChainNode)) {
    let mut vulkan_1_1 = vk::PhysicalDeviceVulkan11Features::default();
    let mut vulkan_1_2 = vk::PhysicalDeviceVulkan12Features::default();
    let mut vulkan_1_3 = vk::PhysicalDeviceVulkan13Features::default();
    unsafe {
        chain::append(head, &mut vulkan_1_1 as *mut _ as ChainNode);
        chain::append(head, &mut vulkan_1_2 as *mut _ as ChainNode);
        chain::append(head, &mut vulkan_1_3 as *mut _ as ChainNode);
    }
    cb(head);
}

unsafe fn property_chain(head: ChainNode, cb: &mut dyn FnMut(ChainNode)) {
    let mut vulkan_1_1 = vk::PhysicalDeviceVulkan11Properties::default();
    let mut vulkan_1_3 = vk::PhysicalDeviceVulkan13Properties::default();
    unsafe {
        chain::append(head, &mut vulkan_1_1 as *mut _ as ChainNode);
        chain::append(head, &mut vulkan_1_3 as *mut _ as ChainNode);
    }
    cb(head);
}

unsafe fn queue_family_chain(
    props: &mut [vk::QueueFamilyProperties2<'static>],
    cb: &mut dyn FnMut(&mut [vk::QueueFamilyProperties2<'static>]),
) {
    cb(props);
}

// The profile speaks the 64-bit format-feature dialect, so the builder links
// the FormatProperties3 view behind the caller's head.
unsafe fn format_chain(head: ChainNode, cb: &mut dyn FnMut(ChainNode)) {
    let mut props_3 = vk::FormatProperties3::default();
    unsafe {
        chain::append(head, &mut props_3 as *mut _ as ChainNode);
    }
    cb(head);
}

pub(crate) static DESC: ProfileDesc = ProfileDesc {
    props: PROPS,
    min_api_version: vk::make_api_version(0, 1, 3, 276),
    instance_extensions: &[],
    device_extensions: DEVICE_EXTENSIONS,
    fallbacks: FALLBACKS,
    features: CategoryDesc {
        struct_types: FEATURE_STRUCT_TYPES,
        fill: fill_features,
        compare: compare_features,
    },
    properties: CategoryDesc {
        struct_types: PROPERTY_STRUCT_TYPES,
        fill: fill_properties,
        compare: compare_properties,
    },
    queue_families: &[],
    queue_family_struct_types: &[],
    formats: FORMATS,
    format_struct_types: FORMAT_STRUCT_TYPES,
    feature_chain,
    property_chain,
    queue_family_chain,
    format_chain,
};
