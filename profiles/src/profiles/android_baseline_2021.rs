// Copyright 2026 The vk-profiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `VP_ANDROID_baseline_2021`: a Vulkan 1.0 mobile baseline.  The only
//! profile in the catalog with instance-extension requirements; because the
//! minimum API is 1.0, the support checker additionally demands the
//! get-physical-device-properties2 instance extension before any of the
//! `*2` queries can run.

use ash::vk;

use crate::chain::{ChainNode, Record};
use crate::compare;
use crate::desc::{
    CategoryDesc, ExtensionProperties, FormatDesc, ProfileDesc, ProfileProperties, QueueFamilyDesc,
};

pub(crate) const PROPS: ProfileProperties =
    ProfileProperties::new("VP_ANDROID_baseline_2021", 1);

static INSTANCE_EXTENSIONS: &[ExtensionProperties] = &[
    ExtensionProperties::new(vk::KHR_ANDROID_SURFACE_NAME, 6),
    ExtensionProperties::new(vk::KHR_EXTERNAL_FENCE_CAPABILITIES_NAME, 1),
    ExtensionProperties::new(vk::KHR_EXTERNAL_MEMORY_CAPABILITIES_NAME, 1),
    ExtensionProperties::new(vk::KHR_EXTERNAL_SEMAPHORE_CAPABILITIES_NAME, 1),
    ExtensionProperties::new(vk::KHR_GET_PHYSICAL_DEVICE_PROPERTIES2_NAME, 1),
    ExtensionProperties::new(vk::KHR_SURFACE_NAME, 25),
];

static DEVICE_EXTENSIONS: &[ExtensionProperties] = &[
    ExtensionProperties::new(vk::KHR_DEDICATED_ALLOCATION_NAME, 1),
    ExtensionProperties::new(vk::KHR_EXTERNAL_FENCE_NAME, 1),
    ExtensionProperties::new(vk::KHR_EXTERNAL_MEMORY_NAME, 1),
    ExtensionProperties::new(vk::KHR_EXTERNAL_SEMAPHORE_NAME, 1),
    ExtensionProperties::new(vk::KHR_GET_MEMORY_REQUIREMENTS2_NAME, 1),
    ExtensionProperties::new(vk::KHR_INCREMENTAL_PRESENT_NAME, 1),
    ExtensionProperties::new(vk::KHR_MAINTENANCE1_NAME, 1),
    ExtensionProperties::new(vk::KHR_STORAGE_BUFFER_STORAGE_CLASS_NAME, 1),
    ExtensionProperties::new(vk::KHR_SWAPCHAIN_NAME, 70),
    ExtensionProperties::new(vk::KHR_VARIABLE_POINTERS_NAME, 1),
];

static FEATURE_STRUCT_TYPES: &[vk::StructureType] =
    &[vk::StructureType::PHYSICAL_DEVICE_FEATURES_2];

static PROPERTY_STRUCT_TYPES: &[vk::StructureType] =
    &[vk::StructureType::PHYSICAL_DEVICE_PROPERTIES_2];

static QUEUE_FAMILY_STRUCT_TYPES: &[vk::StructureType] =
    &[vk::StructureType::QUEUE_FAMILY_PROPERTIES_2];

static FORMAT_STRUCT_TYPES: &[vk::StructureType] = &[vk::StructureType::FORMAT_PROPERTIES_2];

fn fill_features(rec: &mut Record) {
    if let Record::Features2(r) = rec {
        let f = &mut r.features;
        f.robust_buffer_access = vk::TRUE;
        f.full_draw_index_uint32 = vk::TRUE;
        f.image_cube_array = vk::TRUE;
        f.independent_blend = vk::TRUE;
        f.sample_rate_shading = vk::TRUE;
        f.large_points = vk::TRUE;
        f.texture_compression_etc2 = vk::TRUE;
        f.texture_compression_astc_ldr = vk::TRUE;
        f.fragment_stores_and_atomics = vk::TRUE;
        f.shader_image_gather_extended = vk::TRUE;
        f.shader_storage_image_write_without_format = vk::TRUE;
        f.shader_uniform_buffer_array_dynamic_indexing = vk::TRUE;
        f.shader_sampled_image_array_dynamic_indexing = vk::TRUE;
        f.shader_storage_buffer_array_dynamic_indexing = vk::TRUE;
        f.shader_storage_image_array_dynamic_indexing = vk::TRUE;
    }
}

fn compare_features(rec: &Record) -> bool {
    match rec {
        Record::Features2(r) => {
            let f = &r.features;
            compare::feature(f.robust_buffer_access)
                && compare::feature(f.full_draw_index_uint32)
                && compare::feature(f.image_cube_array)
                && compare::feature(f.independent_blend)
                && compare::feature(f.sample_rate_shading)
                && compare::feature(f.large_points)
                && compare::feature(f.texture_compression_etc2)
                && compare::feature(f.texture_compression_astc_ldr)
                && compare::feature(f.fragment_stores_and_atomics)
                && compare::feature(f.shader_image_gather_extended)
                && compare::feature(f.shader_storage_image_write_without_format)
                && compare::feature(f.shader_uniform_buffer_array_dynamic_indexing)
                && compare::feature(f.shader_sampled_image_array_dynamic_indexing)
                && compare::feature(f.shader_storage_buffer_array_dynamic_indexing)
                && compare::feature(f.shader_storage_image_array_dynamic_indexing)
        }
        _ => true,
    }
}

fn fill_properties(rec: &mut Record) {
    if let Record::Properties2(r) = rec {
        let l = &mut r.properties.limits;
        l.max_image_dimension1_d = 4096;
        l.max_image_dimension2_d = 4096;
        l.max_image_dimension3_d = 512;
        l.max_image_dimension_cube = 4096;
        l.max_image_array_layers = 256;
        l.max_uniform_buffer_range = 16384;
        l.max_storage_buffer_range = 134217728;
        l.max_push_constants_size = 128;
        l.max_bound_descriptor_sets = 4;
        l.max_per_stage_descriptor_samplers = 16;
        l.max_per_stage_descriptor_uniform_buffers = 12;
        l.max_per_stage_descriptor_storage_buffers = 4;
        l.max_per_stage_descriptor_sampled_images = 16;
        l.max_per_stage_descriptor_storage_images = 4;
        l.max_compute_shared_memory_size = 16384;
        l.max_compute_work_group_invocations = 128;
        l.max_sampler_anisotropy = 1.0;
        l.max_viewport_dimensions = [4096, 4096];
        l.max_framebuffer_width = 4096;
        l.max_framebuffer_height = 4096;
        l.max_color_attachments = 4;
        l.min_uniform_buffer_offset_alignment = 256;
        l.min_storage_buffer_offset_alignment = 256;
    }
}

fn compare_properties(rec: &Record) -> bool {
    match rec {
        Record::Properties2(r) => {
            let l = &r.properties.limits;
            compare::gte(l.max_image_dimension1_d, 4096)
                && compare::gte(l.max_image_dimension2_d, 4096)
                && compare::gte(l.max_image_dimension3_d, 512)
                && compare::gte(l.max_image_dimension_cube, 4096)
                && compare::gte(l.max_image_array_layers, 256)
                && compare::gte(l.max_uniform_buffer_range, 16384)
                && compare::gte(l.max_storage_buffer_range, 134217728)
                && compare::gte(l.max_push_constants_size, 128)
                && compare::gte(l.max_bound_descriptor_sets, 4)
                && compare::gte(l.max_per_stage_descriptor_samplers, 16)
                && compare::gte(l.max_per_stage_descriptor_uniform_buffers, 12)
                && compare::gte(l.max_per_stage_descriptor_storage_buffers, 4)
                && compare::gte(l.max_per_stage_descriptor_sampled_images, 16)
                && compare::gte(l.max_per_stage_descriptor_storage_images, 4)
                && compare::gte(l.max_compute_shared_memory_size, 16384)
                && compare::gte(l.max_compute_work_group_invocations, 128)
                && compare::gte(l.max_sampler_anisotropy, 1.0)
                && compare::gte(l.max_viewport_dimensions[0], 4096)
                && compare::gte(l.max_viewport_dimensions[1], 4096)
                && compare::gte(l.max_framebuffer_width, 4096)
                && compare::gte(l.max_framebuffer_height, 4096)
                && compare::gte(l.max_color_attachments, 4)
                && compare::aligned(l.min_uniform_buffer_offset_alignment, 256)
                && compare::aligned(l.min_storage_buffer_offset_alignment, 256)
        }
        _ => true,
    }
}

fn fill_queue_family_graphics(rec: &mut Record) {
    if let Record::QueueFamilyProperties2(r) = rec {
        let q = &mut r.queue_family_properties;
        q.queue_flags = vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE;
        q.queue_count = 1;
    }
}

fn compare_queue_family_graphics(rec: &Record) -> bool {
    match rec {
        Record::QueueFamilyProperties2(r) => {
            let q = &r.queue_family_properties;
            q.queue_flags
                .contains(vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE)
                && compare::gte(q.queue_count, 1)
        }
        _ => true,
    }
}

static QUEUE_FAMILIES: &[QueueFamilyDesc] = &[QueueFamilyDesc {
    fill: fill_queue_family_graphics,
    compare: compare_queue_family_graphics,
}];

const SAMPLED_V1: vk::FormatFeatureFlags = vk::FormatFeatureFlags::from_raw(
    vk::FormatFeatureFlags::SAMPLED_IMAGE.as_raw()
        | vk::FormatFeatureFlags::SAMPLED_IMAGE_FILTER_LINEAR.as_raw()
        | vk::FormatFeatureFlags::TRANSFER_SRC.as_raw()
        | vk::FormatFeatureFlags::TRANSFER_DST.as_raw(),
);

const COLOR_V1: vk::FormatFeatureFlags = vk::FormatFeatureFlags::from_raw(
    SAMPLED_V1.as_raw()
        | vk::FormatFeatureFlags::COLOR_ATTACHMENT.as_raw()
        | vk::FormatFeatureFlags::COLOR_ATTACHMENT_BLEND.as_raw(),
);

const DEPTH_V1: vk::FormatFeatureFlags = vk::FormatFeatureFlags::from_raw(
    vk::FormatFeatureFlags::SAMPLED_IMAGE.as_raw()
        | vk::FormatFeatureFlags::DEPTH_STENCIL_ATTACHMENT.as_raw(),
);

fn fill_format_color(rec: &mut Record) {
    if let Record::FormatProperties2(r) = rec {
        r.format_properties.optimal_tiling_features = COLOR_V1;
    }
}

fn compare_format_color(rec: &Record) -> bool {
    match rec {
        Record::FormatProperties2(r) => r
            .format_properties
            .optimal_tiling_features
            .contains(COLOR_V1),
        _ => true,
    }
}

fn fill_format_compressed(rec: &mut Record) {
    if let Record::FormatProperties2(r) = rec {
        r.format_properties.optimal_tiling_features = SAMPLED_V1;
    }
}

fn compare_format_compressed(rec: &Record) -> bool {
    match rec {
        Record::FormatProperties2(r) => r
            .format_properties
            .optimal_tiling_features
            .contains(SAMPLED_V1),
        _ => true,
    }
}

fn fill_format_depth(rec: &mut Record) {
    if let Record::FormatProperties2(r) = rec {
        r.format_properties.optimal_tiling_features = DEPTH_V1;
    }
}

fn compare_format_depth(rec: &Record) -> bool {
    match rec {
        Record::FormatProperties2(r) => r
            .format_properties
            .optimal_tiling_features
            .contains(DEPTH_V1),
        _ => true,
    }
}

static FORMATS: &[FormatDesc] = &[
    FormatDesc {
        format: vk::Format::R8G8B8A8_UNORM,
        fill: fill_format_color,
        compare: compare_format_color,
    },
    FormatDesc {
        format: vk::Format::ETC2_R8G8B8A8_UNORM_BLOCK,
        fill: fill_format_compressed,
        compare: compare_format_compressed,
    },
    FormatDesc {
        format: vk::Format::ASTC_4X4_UNORM_BLOCK,
        fill: fill_format_compressed,
        compare: compare_format_compressed,
    },
    FormatDesc {
        format: vk::Format::D16_UNORM,
        fill: fill_format_depth,
        compare: compare_format_depth,
    },
];

unsafe fn feature_chain(head: ChainNode, cb: &mut dyn FnMut(ChainNode)) {
    cb(head);
}

unsafe fn property_chain(head: ChainNode, cb: &mut dyn FnMut(ChainNode)) {
    cb(head);
}

unsafe fn queue_family_chain(
    props: &mut [vk::QueueFamilyProperties2<'static>],
    cb: &mut dyn FnMut(&mut [vk::QueueFamilyProperties2<'static>]),
) {
    cb(props);
}

unsafe fn format_chain(head: ChainNode, cb: &mut dyn FnMut(ChainNode)) {
    cb(head);
}

pub(crate) static DESC: ProfileDesc = ProfileDesc {
    props: PROPS,
    min_api_version: vk::make_api_version(0, 1, 0, 68),
    instance_extensions: INSTANCE_EXTENSIONS,
    device_extensions: DEVICE_EXTENSIONS,
    fallbacks: &[],
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
    queue_families: QUEUE_FAMILIES,
    queue_family_struct_types: QUEUE_FAMILY_STRUCT_TYPES,
    formats: FORMATS,
    format_struct_types: FORMAT_STRUCT_TYPES,
    feature_chain,
    property_chain,
    queue_family_chain,
    format_chain,
};
