// Copyright 2026 The vk-profiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `VP_LUNARG_desktop_baseline_2023`: a Vulkan 1.2 desktop baseline.  The
//! widest profile in the catalog: extension-introduced feature records,
//! per-format capabilities, and two queue-family requirements (a combined
//! graphics queue and a transfer queue on distinct families).

use ash::vk;

use crate::chain::{self, ChainNode, Record};
use crate::compare;
use crate::desc::{
    CategoryDesc, ExtensionProperties, FormatDesc, ProfileDesc, ProfileProperties, QueueFamilyDesc,
};

pub(crate) const PROPS: ProfileProperties =
    ProfileProperties::new("VP_LUNARG_desktop_baseline_2023", 1);

static DEVICE_EXTENSIONS: &[ExtensionProperties] = &[
    ExtensionProperties::new(vk::EXT_IMAGE_ROBUSTNESS_NAME, 1),
    ExtensionProperties::new(vk::KHR_DYNAMIC_RENDERING_NAME, 1),
    ExtensionProperties::new(vk::KHR_SWAPCHAIN_NAME, 70),
    ExtensionProperties::new(vk::KHR_SYNCHRONIZATION2_NAME, 1),
];

static FEATURE_STRUCT_TYPES: &[vk::StructureType] = &[
    vk::StructureType::PHYSICAL_DEVICE_FEATURES_2,
    vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_1_FEATURES,
    vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
    vk::StructureType::PHYSICAL_DEVICE_DYNAMIC_RENDERING_FEATURES,
    vk::StructureType::PHYSICAL_DEVICE_SYNCHRONIZATION_2_FEATURES,
    vk::StructureType::PHYSICAL_DEVICE_IMAGE_ROBUSTNESS_FEATURES,
];

static PROPERTY_STRUCT_TYPES: &[vk::StructureType] = &[
    vk::StructureType::PHYSICAL_DEVICE_PROPERTIES_2,
    vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_1_PROPERTIES,
    vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_2_PROPERTIES,
];

static QUEUE_FAMILY_STRUCT_TYPES: &[vk::StructureType] =
    &[vk::StructureType::QUEUE_FAMILY_PROPERTIES_2];

static FORMAT_STRUCT_TYPES: &[vk::StructureType] = &[vk::StructureType::FORMAT_PROPERTIES_2];

fn fill_features(rec: &mut Record) {
    match rec {
        Record::Features2(r) => {
            let f = &mut r.features;
            f.robust_buffer_access = vk::TRUE;
            f.full_draw_index_uint32 = vk::TRUE;
            f.image_cube_array = vk::TRUE;
            f.independent_blend = vk::TRUE;
            f.geometry_shader = vk::TRUE;
            f.tessellation_shader = vk::TRUE;
            f.sample_rate_shading = vk::TRUE;
            f.dual_src_blend = vk::TRUE;
            f.multi_draw_indirect = vk::TRUE;
            f.depth_clamp = vk::TRUE;
            f.depth_bias_clamp = vk::TRUE;
            f.fill_mode_non_solid = vk::TRUE;
            f.large_points = vk::TRUE;
            f.multi_viewport = vk::TRUE;
            f.sampler_anisotropy = vk::TRUE;
            f.texture_compression_bc = vk::TRUE;
            f.occlusion_query_precise = vk::TRUE;
            f.vertex_pipeline_stores_and_atomics = vk::TRUE;
            f.fragment_stores_and_atomics = vk::TRUE;
            f.shader_tessellation_and_geometry_point_size = vk::TRUE;
            f.shader_image_gather_extended = vk::TRUE;
            f.shader_storage_image_write_without_format = vk::TRUE;
            f.shader_uniform_buffer_array_dynamic_indexing = vk::TRUE;
            f.shader_sampled_image_array_dynamic_indexing = vk::TRUE;
            f.shader_storage_buffer_array_dynamic_indexing = vk::TRUE;
            f.shader_storage_image_array_dynamic_indexing = vk::TRUE;
            f.shader_clip_distance = vk::TRUE;
        }
        Record::Vulkan11Features(f) => {
            f.multiview = vk::TRUE;
            f.shader_draw_parameters = vk::TRUE;
        }
        Record::Vulkan12Features(f) => {
            f.sampler_mirror_clamp_to_edge = vk::TRUE;
            f.descriptor_indexing = vk::TRUE;
            f.shader_sampled_image_array_non_uniform_indexing = vk::TRUE;
            f.descriptor_binding_sampled_image_update_after_bind = vk::TRUE;
            f.descriptor_binding_partially_bound = vk::TRUE;
            f.runtime_descriptor_array = vk::TRUE;
            f.uniform_buffer_standard_layout = vk::TRUE;
            f.host_query_reset = vk::TRUE;
            f.imageless_framebuffer = vk::TRUE;
            f.timeline_semaphore = vk::TRUE;
        }
        Record::DynamicRenderingFeatures(f) => {
            f.dynamic_rendering = vk::TRUE;
        }
        Record::Synchronization2Features(f) => {
            f.synchronization2 = vk::TRUE;
        }
        Record::ImageRobustnessFeatures(f) => {
            f.robust_image_access = vk::TRUE;
        }
        _ => {}
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
                && compare::feature(f.geometry_shader)
                && compare::feature(f.tessellation_shader)
                && compare::feature(f.sample_rate_shading)
                && compare::feature(f.dual_src_blend)
                && compare::feature(f.multi_draw_indirect)
                && compare::feature(f.depth_clamp)
                && compare::feature(f.depth_bias_clamp)
                && compare::feature(f.fill_mode_non_solid)
                && compare::feature(f.large_points)
                && compare::feature(f.multi_viewport)
                && compare::feature(f.sampler_anisotropy)
                && compare::feature(f.texture_compression_bc)
                && compare::feature(f.occlusion_query_precise)
                && compare::feature(f.vertex_pipeline_stores_and_atomics)
                && compare::feature(f.fragment_stores_and_atomics)
                && compare::feature(f.shader_tessellation_and_geometry_point_size)
                && compare::feature(f.shader_image_gather_extended)
                && compare::feature(f.shader_storage_image_write_without_format)
                && compare::feature(f.shader_uniform_buffer_array_dynamic_indexing)
                && compare::feature(f.shader_sampled_image_array_dynamic_indexing)
                && compare::feature(f.shader_storage_buffer_array_dynamic_indexing)
                && compare::feature(f.shader_storage_image_array_dynamic_indexing)
                && compare::feature(f.shader_clip_distance)
        }
        Record::Vulkan11Features(f) => {
            compare::feature(f.multiview) && compare::feature(f.shader_draw_parameters)
        }
        Record::Vulkan12Features(f) => {
            compare::feature(f.sampler_mirror_clamp_to_edge)
                && compare::feature(f.descriptor_indexing)
                && compare::feature(f.shader_sampled_image_array_non_uniform_indexing)
                && compare::feature(f.descriptor_binding_sampled_image_update_after_bind)
                && compare::feature(f.descriptor_binding_partially_bound)
                && compare::feature(f.runtime_descriptor_array)
                && compare::feature(f.uniform_buffer_standard_layout)
                && compare::feature(f.host_query_reset)
                && compare::feature(f.imageless_framebuffer)
                && compare::feature(f.timeline_semaphore)
        }
        Record::DynamicRenderingFeatures(f) => compare::feature(f.dynamic_rendering),
        Record::Synchronization2Features(f) => compare::feature(f.synchronization2),
        Record::ImageRobustnessFeatures(f) => compare::feature(f.robust_image_access),
        _ => true,
    }
}

fn fill_properties(rec: &mut Record) {
    match rec {
        Record::Properties2(r) => {
            let l = &mut r.properties.limits;
            l.max_image_dimension1_d = 16384;
            l.max_image_dimension2_d = 16384;
            l.max_image_dimension3_d = 2048;
            l.max_image_dimension_cube = 16384;
            l.max_image_array_layers = 2048;
            l.max_uniform_buffer_range = 65536;
            l.max_storage_buffer_range = 134217728;
            l.max_push_constants_size = 128;
            l.max_memory_allocation_count = 4096;
            l.max_sampler_allocation_count = 1024;
            l.buffer_image_granularity = 1024;
            l.max_bound_descriptor_sets = 8;
            l.max_per_stage_descriptor_samplers = 16;
            l.max_per_stage_descriptor_uniform_buffers = 15;
            l.max_per_stage_descriptor_storage_buffers = 16;
            l.max_per_stage_descriptor_sampled_images = 128;
            l.max_per_stage_descriptor_storage_images = 8;
            l.max_per_stage_descriptor_input_attachments = 8;
            l.max_per_stage_resources = 128;
            l.max_vertex_input_attributes = 28;
            l.max_vertex_input_bindings = 28;
            l.max_vertex_input_attribute_offset = 2047;
            l.max_vertex_input_binding_stride = 2048;
            l.max_vertex_output_components = 124;
            l.max_fragment_input_components = 116;
            l.max_fragment_output_attachments = 8;
            l.max_compute_shared_memory_size = 32768;
            l.max_compute_work_group_invocations = 1024;
            l.max_compute_work_group_size = [1024, 1024, 64];
            l.sub_pixel_precision_bits = 4;
            l.sub_texel_precision_bits = 4;
            l.mipmap_precision_bits = 4;
            l.max_draw_indexed_index_value = 4294967294;
            l.max_sampler_lod_bias = 4.0;
            l.max_sampler_anisotropy = 16.0;
            l.max_viewports = 16;
            l.max_viewport_dimensions = [16384, 16384];
            l.viewport_bounds_range = [-32768.0, 32767.0];
            l.min_memory_map_alignment = 64;
            l.min_texel_buffer_offset_alignment = 64;
            l.min_uniform_buffer_offset_alignment = 256;
            l.min_storage_buffer_offset_alignment = 64;
            l.min_texel_offset = -8;
            l.max_texel_offset = 7;
            l.min_texel_gather_offset = -8;
            l.max_texel_gather_offset = 7;
            l.min_interpolation_offset = -0.5;
            l.max_interpolation_offset = 0.4375;
            l.max_framebuffer_width = 16384;
            l.max_framebuffer_height = 16384;
            l.max_framebuffer_layers = 1024;
            l.framebuffer_color_sample_counts =
                vk::SampleCountFlags::TYPE_1 | vk::SampleCountFlags::TYPE_4;
            l.framebuffer_depth_sample_counts =
                vk::SampleCountFlags::TYPE_1 | vk::SampleCountFlags::TYPE_4;
            l.framebuffer_stencil_sample_counts =
                vk::SampleCountFlags::TYPE_1 | vk::SampleCountFlags::TYPE_4;
            l.max_color_attachments = 8;
            l.sampled_image_color_sample_counts =
                vk::SampleCountFlags::TYPE_1 | vk::SampleCountFlags::TYPE_4;
            l.sampled_image_depth_sample_counts =
                vk::SampleCountFlags::TYPE_1 | vk::SampleCountFlags::TYPE_4;
            l.storage_image_sample_counts = vk::SampleCountFlags::TYPE_1;
            l.max_clip_distances = 8;
            l.max_combined_clip_and_cull_distances = 8;
            l.point_size_range = [1.0, 64.0];
            l.line_width_range = [1.0, 1.0];
            l.point_size_granularity = 0.125;
            l.line_width_granularity = 0.5;
        }
        Record::Vulkan11Properties(p) => {
            p.subgroup_size = 4;
            p.subgroup_supported_stages = vk::ShaderStageFlags::COMPUTE;
            p.subgroup_supported_operations =
                vk::SubgroupFeatureFlags::BASIC | vk::SubgroupFeatureFlags::BALLOT;
            p.max_memory_allocation_size = 1073741824;
        }
        Record::Vulkan12Properties(p) => {
            p.supported_depth_resolve_modes = vk::ResolveModeFlags::SAMPLE_ZERO;
            p.supported_stencil_resolve_modes = vk::ResolveModeFlags::SAMPLE_ZERO;
            p.independent_resolve_none = vk::TRUE;
            p.max_timeline_semaphore_value_difference = 2147483647;
        }
        _ => {}
    }
}

fn compare_properties(rec: &Record) -> bool {
    match rec {
        Record::Properties2(r) => {
            let l = &r.properties.limits;
            compare::gte(l.max_image_dimension1_d, 16384)
                && compare::gte(l.max_image_dimension2_d, 16384)
                && compare::gte(l.max_image_dimension3_d, 2048)
                && compare::gte(l.max_image_dimension_cube, 16384)
                && compare::gte(l.max_image_array_layers, 2048)
                && compare::gte(l.max_uniform_buffer_range, 65536)
                && compare::gte(l.max_storage_buffer_range, 134217728)
                && compare::gte(l.max_push_constants_size, 128)
                && compare::gte(l.max_memory_allocation_count, 4096)
                && compare::gte(l.max_sampler_allocation_count, 1024)
                && compare::aligned(l.buffer_image_granularity, 1024)
                && compare::gte(l.max_bound_descriptor_sets, 8)
                && compare::gte(l.max_per_stage_descriptor_samplers, 16)
                && compare::gte(l.max_per_stage_descriptor_uniform_buffers, 15)
                && compare::gte(l.max_per_stage_descriptor_storage_buffers, 16)
                && compare::gte(l.max_per_stage_descriptor_sampled_images, 128)
                && compare::gte(l.max_per_stage_descriptor_storage_images, 8)
                && compare::gte(l.max_per_stage_descriptor_input_attachments, 8)
                && compare::gte(l.max_per_stage_resources, 128)
                && compare::gte(l.max_vertex_input_attributes, 28)
                && compare::gte(l.max_vertex_input_bindings, 28)
                && compare::gte(l.max_vertex_input_attribute_offset, 2047)
                && compare::gte(l.max_vertex_input_binding_stride, 2048)
                && compare::gte(l.max_vertex_output_components, 124)
                && compare::gte(l.max_fragment_input_components, 116)
                && compare::gte(l.max_fragment_output_attachments, 8)
                && compare::gte(l.max_compute_shared_memory_size, 32768)
                && compare::gte(l.max_compute_work_group_invocations, 1024)
                && compare::gte(l.max_compute_work_group_size[0], 1024)
                && compare::gte(l.max_compute_work_group_size[1], 1024)
                && compare::gte(l.max_compute_work_group_size[2], 64)
                && compare::gte(l.sub_pixel_precision_bits, 4)
                && compare::gte(l.sub_texel_precision_bits, 4)
                && compare::gte(l.mipmap_precision_bits, 4)
                && compare::gte(l.max_draw_indexed_index_value, 4294967294)
                && compare::gte(l.max_sampler_lod_bias, 4.0)
                && compare::gte(l.max_sampler_anisotropy, 16.0)
                && compare::gte(l.max_viewports, 16)
                && compare::gte(l.max_viewport_dimensions[0], 16384)
                && compare::gte(l.max_viewport_dimensions[1], 16384)
                && compare::lte(l.viewport_bounds_range[0], -32768.0)
                && compare::gte(l.viewport_bounds_range[1], 32767.0)
                && compare::aligned(l.min_memory_map_alignment as vk::DeviceSize, 64)
                && compare::aligned(l.min_texel_buffer_offset_alignment, 64)
                && compare::aligned(l.min_uniform_buffer_offset_alignment, 256)
                && compare::aligned(l.min_storage_buffer_offset_alignment, 64)
                && compare::lte(l.min_texel_offset, -8)
                && compare::gte(l.max_texel_offset, 7)
                && compare::lte(l.min_texel_gather_offset, -8)
                && compare::gte(l.max_texel_gather_offset, 7)
                && compare::lte(l.min_interpolation_offset, -0.5)
                && compare::gte(l.max_interpolation_offset, 0.4375)
                && compare::gte(l.max_framebuffer_width, 16384)
                && compare::gte(l.max_framebuffer_height, 16384)
                && compare::gte(l.max_framebuffer_layers, 1024)
                && l.framebuffer_color_sample_counts
                    .contains(vk::SampleCountFlags::TYPE_1 | vk::SampleCountFlags::TYPE_4)
                && l.framebuffer_depth_sample_counts
                    .contains(vk::SampleCountFlags::TYPE_1 | vk::SampleCountFlags::TYPE_4)
                && l.framebuffer_stencil_sample_counts
                    .contains(vk::SampleCountFlags::TYPE_1 | vk::SampleCountFlags::TYPE_4)
                && compare::gte(l.max_color_attachments, 8)
                && l.sampled_image_color_sample_counts
                    .contains(vk::SampleCountFlags::TYPE_1 | vk::SampleCountFlags::TYPE_4)
                && l.sampled_image_depth_sample_counts
                    .contains(vk::SampleCountFlags::TYPE_1 | vk::SampleCountFlags::TYPE_4)
                && l.storage_image_sample_counts
                    .contains(vk::SampleCountFlags::TYPE_1)
                && compare::gte(l.max_clip_distances, 8)
                && compare::gte(l.max_combined_clip_and_cull_distances, 8)
                && compare::lte(l.point_size_range[0], 1.0)
                && compare::gte(l.point_size_range[1], 64.0)
                && compare::lte(l.line_width_range[0], 1.0)
                && compare::gte(l.line_width_range[1], 1.0)
                && compare::granular(l.point_size_granularity, 0.125, 1.0)
                && compare::granular(l.line_width_granularity, 0.5, 1.0)
        }
        Record::Vulkan11Properties(p) => {
            compare::gte(p.subgroup_size, 4)
                && p.subgroup_supported_stages
                    .contains(vk::ShaderStageFlags::COMPUTE)
                && p.subgroup_supported_operations
                    .contains(vk::SubgroupFeatureFlags::BASIC | vk::SubgroupFeatureFlags::BALLOT)
                && compare::gte(p.max_memory_allocation_size, 1073741824)
        }
        Record::Vulkan12Properties(p) => {
            p.supported_depth_resolve_modes
                .contains(vk::ResolveModeFlags::SAMPLE_ZERO)
                && p.supported_stencil_resolve_modes
                    .contains(vk::ResolveModeFlags::SAMPLE_ZERO)
                && compare::feature(p.independent_resolve_none)
                && compare::gte(p.max_timeline_semaphore_value_difference, 2147483647)
        }
        _ => true,
    }
}

// Queue family 0: a combined graphics queue.
fn fill_queue_family_graphics(rec: &mut Record) {
    if let Record::QueueFamilyProperties2(r) = rec {
        let q = &mut r.queue_family_properties;
        q.queue_flags =
            vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE | vk::QueueFlags::TRANSFER;
        q.queue_count = 1;
        q.timestamp_valid_bits = 36;
        q.min_image_transfer_granularity = vk::Extent3D {
            width: 1,
            height: 1,
            depth: 1,
        };
    }
}

fn compare_queue_family_graphics(rec: &Record) -> bool {
    match rec {
        Record::QueueFamilyProperties2(r) => {
            let q = &r.queue_family_properties;
            q.queue_flags.contains(
                vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE | vk::QueueFlags::TRANSFER,
            ) && compare::gte(q.queue_count, 1)
                && compare::gte(q.timestamp_valid_bits, 36)
                && compare::lte(q.min_image_transfer_granularity.width, 1)
                && compare::lte(q.min_image_transfer_granularity.height, 1)
                && compare::lte(q.min_image_transfer_granularity.depth, 1)
        }
        _ => true,
    }
}

// Queue family 1: a transfer queue, possibly dedicated.
fn fill_queue_family_transfer(rec: &mut Record) {
    if let Record::QueueFamilyProperties2(r) = rec {
        let q = &mut r.queue_family_properties;
        q.queue_flags = vk::QueueFlags::TRANSFER;
        q.queue_count = 1;
    }
}

fn compare_queue_family_transfer(rec: &Record) -> bool {
    match rec {
        Record::QueueFamilyProperties2(r) => {
            let q = &r.queue_family_properties;
            q.queue_flags.contains(vk::QueueFlags::TRANSFER) && compare::gte(q.queue_count, 1)
        }
        _ => true,
    }
}

static QUEUE_FAMILIES: &[QueueFamilyDesc] = &[
    QueueFamilyDesc {
        fill: fill_queue_family_graphics,
        compare: compare_queue_family_graphics,
    },
    QueueFamilyDesc {
        fill: fill_queue_family_transfer,
        compare: compare_queue_family_transfer,
    },
];

const COLOR_RENDER_V1: vk::FormatFeatureFlags = vk::FormatFeatureFlags::from_raw(
    vk::FormatFeatureFlags::SAMPLED_IMAGE.as_raw()
        | vk::FormatFeatureFlags::SAMPLED_IMAGE_FILTER_LINEAR.as_raw()
        | vk::FormatFeatureFlags::COLOR_ATTACHMENT.as_raw()
        | vk::FormatFeatureFlags::COLOR_ATTACHMENT_BLEND.as_raw()
        | vk::FormatFeatureFlags::BLIT_SRC.as_raw()
        | vk::FormatFeatureFlags::BLIT_DST.as_raw()
        | vk::FormatFeatureFlags::TRANSFER_SRC.as_raw()
        | vk::FormatFeatureFlags::TRANSFER_DST.as_raw(),
);

const DEPTH_V1: vk::FormatFeatureFlags = vk::FormatFeatureFlags::from_raw(
    vk::FormatFeatureFlags::SAMPLED_IMAGE.as_raw()
        | vk::FormatFeatureFlags::DEPTH_STENCIL_ATTACHMENT.as_raw(),
);

fn fill_format_color(rec: &mut Record) {
    if let Record::FormatProperties2(r) = rec {
        r.format_properties.optimal_tiling_features = COLOR_RENDER_V1;
    }
}

fn compare_format_color(rec: &Record) -> bool {
    match rec {
        Record::FormatProperties2(r) => r
            .format_properties
            .optimal_tiling_features
            .contains(COLOR_RENDER_V1),
        _ => true,
    }
}

fn fill_format_storage_color(rec: &mut Record) {
    if let Record::FormatProperties2(r) = rec {
        r.format_properties.optimal_tiling_features =
            COLOR_RENDER_V1 | vk::FormatFeatureFlags::STORAGE_IMAGE;
        r.format_properties.buffer_features = vk::FormatFeatureFlags::UNIFORM_TEXEL_BUFFER
            | vk::FormatFeatureFlags::VERTEX_BUFFER;
    }
}

fn compare_format_storage_color(rec: &Record) -> bool {
    match rec {
        Record::FormatProperties2(r) => {
            r.format_properties
                .optimal_tiling_features
                .contains(COLOR_RENDER_V1 | vk::FormatFeatureFlags::STORAGE_IMAGE)
                && r.format_properties.buffer_features.contains(
                    vk::FormatFeatureFlags::UNIFORM_TEXEL_BUFFER
                        | vk::FormatFeatureFlags::VERTEX_BUFFER,
                )
        }
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
        format: vk::Format::B8G8R8A8_UNORM,
        fill: fill_format_color,
        compare: compare_format_color,
    },
    FormatDesc {
        format: vk::Format::R8G8B8A8_UNORM,
        fill: fill_format_storage_color,
        compare: compare_format_storage_color,
    },
    FormatDesc {
        format: vk::Format::R16G16B16A16_SFLOAT,
        fill: fill_format_color,
        compare: compare_format_color,
    },
    FormatDesc {
        format: vk::Format::D16_UNORM,
        fill: fill_format_depth,
        compare: compare_format_depth,
    },
    FormatDesc {
        format: vk::Format::D32_SFLOAT,
        fill: fill_format_depth,
        compare: compare_format_depth,
    },
];

unsafe fn feature_chain(head: ChainNode, cb: &mut dyn FnMut(ChainNode)) {
    let mut vulkan_1_1 = vk::PhysicalDeviceVulkan11Features::default();
    let mut vulkan_1_2 = vk::PhysicalDeviceVulkan12Features::default();
    let mut dynamic_rendering = vk::PhysicalDeviceDynamicRenderingFeatures::default();
    let mut synchronization_2 = vk::PhysicalDeviceSynchronization2Features::default();
    let mut image_robustness = vk::PhysicalDeviceImageRobustnessFeatures::default();
    unsafe {
        chain::append(head, &mut vulkan_1_1 as *mut _ as ChainNode);
        chain::append(head, &mut vulkan_1_2 as *mut _ as ChainNode);
        chain::append(head, &mut dynamic_rendering as *mut _ as ChainNode);
        chain::append(head, &mut synchronization_2 as *mut _ as ChainNode);
        chain::append(head, &mut image_robustness as *mut _ as ChainNode);
    }
    cb(head);
}

unsafe fn property_chain(head: ChainNode, cb: &mut dyn FnMut(ChainNode)) {
    let mut vulkan_1_1 = vk::PhysicalDeviceVulkan11Properties::default();
    let mut vulkan_1_2 = vk::PhysicalDeviceVulkan12Properties::default();
    unsafe {
        chain::append(head, &mut vulkan_1_1 as *mut _ as ChainNode);
        chain::append(head, &mut vulkan_1_2 as *mut _ as ChainNode);
    }
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
    min_api_version: vk::make_api_version(0, 1, 2, 148),
    instance_extensions: &[],
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
