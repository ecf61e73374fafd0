// Copyright 2026 The vk-profiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `VP_KHR_roadmap_2022`: the 2022 roadmap milestone.  Everything it needs
//! is core Vulkan 1.3, so the extension lists are empty and the requirements
//! live entirely in the core feature and property aggregates.

use ash::vk;

use crate::chain::{self, ChainNode, Record};
use crate::compare;
use crate::desc::{CategoryDesc, ProfileDesc, ProfileProperties};

pub(crate) const PROPS: ProfileProperties = ProfileProperties::new("VP_KHR_roadmap_2022", 1);

static FEATURE_STRUCT_TYPES: &[vk::StructureType] = &[
    vk::StructureType::PHYSICAL_DEVICE_FEATURES_2,
    vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_1_FEATURES,
    vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
    vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_3_FEATURES,
];

static PROPERTY_STRUCT_TYPES: &[vk::StructureType] = &[
    vk::StructureType::PHYSICAL_DEVICE_PROPERTIES_2,
    vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_1_PROPERTIES,
    vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_2_PROPERTIES,
    vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_3_PROPERTIES,
];

// The 2024 roadmap supersets these requirements, so the pair is shared with
// that module.
pub(crate) fn fill_features(rec: &mut Record) {
    match rec {
        Record::Features2(r) => {
            let f = &mut r.features;
            f.full_draw_index_uint32 = vk::TRUE;
            f.image_cube_array = vk::TRUE;
            f.independent_blend = vk::TRUE;
            f.sample_rate_shading = vk::TRUE;
            f.draw_indirect_first_instance = vk::TRUE;
            f.depth_clamp = vk::TRUE;
            f.depth_bias_clamp = vk::TRUE;
            f.sampler_anisotropy = vk::TRUE;
            f.occlusion_query_precise = vk::TRUE;
            f.fragment_stores_and_atomics = vk::TRUE;
            f.shader_storage_image_extended_formats = vk::TRUE;
            f.shader_uniform_buffer_array_dynamic_indexing = vk::TRUE;
            f.shader_sampled_image_array_dynamic_indexing = vk::TRUE;
            f.shader_storage_buffer_array_dynamic_indexing = vk::TRUE;
            f.shader_storage_image_array_dynamic_indexing = vk::TRUE;
        }
        Record::Vulkan11Features(f) => {
            f.multiview = vk::TRUE;
            f.sampler_ycbcr_conversion = vk::TRUE;
            f.shader_draw_parameters = vk::TRUE;
            f.storage_buffer16_bit_access = vk::TRUE;
        }
        Record::Vulkan12Features(f) => {
            f.sampler_mirror_clamp_to_edge = vk::TRUE;
            f.descriptor_indexing = vk::TRUE;
            f.shader_uniform_texel_buffer_array_dynamic_indexing = vk::TRUE;
            f.shader_storage_texel_buffer_array_dynamic_indexing = vk::TRUE;
            f.shader_uniform_buffer_array_non_uniform_indexing = vk::TRUE;
            f.shader_sampled_image_array_non_uniform_indexing = vk::TRUE;
            f.shader_storage_buffer_array_non_uniform_indexing = vk::TRUE;
            f.shader_storage_image_array_non_uniform_indexing = vk::TRUE;
            f.descriptor_binding_sampled_image_update_after_bind = vk::TRUE;
            f.descriptor_binding_storage_image_update_after_bind = vk::TRUE;
            f.descriptor_binding_storage_buffer_update_after_bind = vk::TRUE;
            f.descriptor_binding_uniform_texel_buffer_update_after_bind = vk::TRUE;
            f.descriptor_binding_storage_texel_buffer_update_after_bind = vk::TRUE;
            f.descriptor_binding_update_unused_while_pending = vk::TRUE;
            f.descriptor_binding_partially_bound = vk::TRUE;
            f.descriptor_binding_variable_descriptor_count = vk::TRUE;
            f.runtime_descriptor_array = vk::TRUE;
            f.scalar_block_layout = vk::TRUE;
            f.imageless_framebuffer = vk::TRUE;
            f.uniform_buffer_standard_layout = vk::TRUE;
            f.shader_subgroup_extended_types = vk::TRUE;
            f.separate_depth_stencil_layouts = vk::TRUE;
            f.host_query_reset = vk::TRUE;
            f.timeline_semaphore = vk::TRUE;
            f.buffer_device_address = vk::TRUE;
            f.vulkan_memory_model = vk::TRUE;
            f.vulkan_memory_model_device_scope = vk::TRUE;
            f.subgroup_broadcast_dynamic_id = vk::TRUE;
        }
        Record::Vulkan13Features(f) => {
            f.robust_image_access = vk::TRUE;
            f.inline_uniform_block = vk::TRUE;
            f.descriptor_binding_inline_uniform_block_update_after_bind = vk::TRUE;
            f.pipeline_creation_cache_control = vk::TRUE;
            f.private_data = vk::TRUE;
            f.shader_demote_to_helper_invocation = vk::TRUE;
            f.shader_terminate_invocation = vk::TRUE;
            f.subgroup_size_control = vk::TRUE;
            f.compute_full_subgroups = vk::TRUE;
            f.synchronization2 = vk::TRUE;
            f.shader_zero_initialize_workgroup_memory = vk::TRUE;
            f.dynamic_rendering = vk::TRUE;
            f.shader_integer_dot_product = vk::TRUE;
            f.maintenance4 = vk::TRUE;
        }
        _ => {}
    }
}

pub(crate) fn compare_features(rec: &Record) -> bool {
    match rec {
        Record::Features2(r) => {
            let f = &r.features;
            compare::feature(f.full_draw_index_uint32)
                && compare::feature(f.image_cube_array)
                && compare::feature(f.independent_blend)
                && compare::feature(f.sample_rate_shading)
                && compare::feature(f.draw_indirect_first_instance)
                && compare::feature(f.depth_clamp)
                && compare::feature(f.depth_bias_clamp)
                && compare::feature(f.sampler_anisotropy)
                && compare::feature(f.occlusion_query_precise)
                && compare::feature(f.fragment_stores_and_atomics)
                && compare::feature(f.shader_storage_image_extended_formats)
                && compare::feature(f.shader_uniform_buffer_array_dynamic_indexing)
                && compare::feature(f.shader_sampled_image_array_dynamic_indexing)
                && compare::feature(f.shader_storage_buffer_array_dynamic_indexing)
                && compare::feature(f.shader_storage_image_array_dynamic_indexing)
        }
        Record::Vulkan11Features(f) => {
            compare::feature(f.multiview)
                && compare::feature(f.sampler_ycbcr_conversion)
                && compare::feature(f.shader_draw_parameters)
                && compare::feature(f.storage_buffer16_bit_access)
        }
        Record::Vulkan12Features(f) => {
            compare::feature(f.sampler_mirror_clamp_to_edge)
                && compare::feature(f.descriptor_indexing)
                && compare::feature(f.shader_uniform_texel_buffer_array_dynamic_indexing)
                && compare::feature(f.shader_storage_texel_buffer_array_dynamic_indexing)
                && compare::feature(f.shader_uniform_buffer_array_non_uniform_indexing)
                && compare::feature(f.shader_sampled_image_array_non_uniform_indexing)
                && compare::feature(f.shader_storage_buffer_array_non_uniform_indexing)
                && compare::feature(f.shader_storage_image_array_non_uniform_indexing)
                && compare::feature(f.descriptor_binding_sampled_image_update_after_bind)
                && compare::feature(f.descriptor_binding_storage_image_update_after_bind)
                && compare::feature(f.descriptor_binding_storage_buffer_update_after_bind)
                && compare::feature(f.descriptor_binding_uniform_texel_buffer_update_after_bind)
                && compare::feature(f.descriptor_binding_storage_texel_buffer_update_after_bind)
                && compare::feature(f.descriptor_binding_update_unused_while_pending)
                && compare::feature(f.descriptor_binding_partially_bound)
                && compare::feature(f.descriptor_binding_variable_descriptor_count)
                && compare::feature(f.runtime_descriptor_array)
                && compare::feature(f.scalar_block_layout)
                && compare::feature(f.imageless_framebuffer)
                && compare::feature(f.uniform_buffer_standard_layout)
                && compare::feature(f.shader_subgroup_extended_types)
                && compare::feature(f.separate_depth_stencil_layouts)
                && compare::feature(f.host_query_reset)
                && compare::feature(f.timeline_semaphore)
                && compare::feature(f.buffer_device_address)
                && compare::feature(f.vulkan_memory_model)
                && compare::feature(f.vulkan_memory_model_device_scope)
                && compare::feature(f.subgroup_broadcast_dynamic_id)
        }
        Record::Vulkan13Features(f) => {
            compare::feature(f.robust_image_access)
                && compare::feature(f.inline_uniform_block)
                && compare::feature(f.descriptor_binding_inline_uniform_block_update_after_bind)
                && compare::feature(f.pipeline_creation_cache_control)
                && compare::feature(f.private_data)
                && compare::feature(f.shader_demote_to_helper_invocation)
                && compare::feature(f.shader_terminate_invocation)
                && compare::feature(f.subgroup_size_control)
                && compare::feature(f.compute_full_subgroups)
                && compare::feature(f.synchronization2)
                && compare::feature(f.shader_zero_initialize_workgroup_memory)
                && compare::feature(f.dynamic_rendering)
                && compare::feature(f.shader_integer_dot_product)
                && compare::feature(f.maintenance4)
        }
        _ => true,
    }
}

fn fill_properties(rec: &mut Record) {
    match rec {
        Record::Properties2(r) => {
            let l = &mut r.properties.limits;
            l.max_image_dimension1_d = 8192;
            l.max_image_dimension2_d = 8192;
            l.max_image_dimension_cube = 8192;
            l.max_image_array_layers = 2048;
            l.max_uniform_buffer_range = 65536;
            l.buffer_image_granularity = 4096;
            l.max_sampler_lod_bias = 14.0;
            l.max_bound_descriptor_sets = 7;
            l.max_per_stage_descriptor_samplers = 64;
            l.max_per_stage_descriptor_uniform_buffers = 15;
            l.max_per_stage_descriptor_storage_buffers = 30;
            l.max_per_stage_descriptor_sampled_images = 200;
            l.max_per_stage_descriptor_storage_images = 16;
            l.max_per_stage_resources = 200;
            l.max_descriptor_set_samplers = 576;
            l.max_descriptor_set_uniform_buffers = 90;
            l.max_descriptor_set_storage_buffers = 96;
            l.max_descriptor_set_sampled_images = 1800;
            l.max_descriptor_set_storage_images = 144;
            l.max_fragment_combined_output_resources = 16;
            l.max_compute_work_group_invocations = 256;
            l.sub_pixel_precision_bits = 8;
            l.mipmap_precision_bits = 6;
            l.max_sampler_anisotropy = 16.0;
            l.max_color_attachments = 7;
            l.min_uniform_buffer_offset_alignment = 256;
            l.min_storage_buffer_offset_alignment = 64;
            l.standard_sample_locations = vk::TRUE;
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
            p.max_multiview_view_count = 6;
            p.max_multiview_instance_index = 134217727;
            p.max_per_set_descriptors = 700;
            p.max_memory_allocation_size = 2147483648;
        }
        Record::Vulkan12Properties(p) => {
            p.shader_signed_zero_inf_nan_preserve_float16 = vk::TRUE;
            p.shader_signed_zero_inf_nan_preserve_float32 = vk::TRUE;
            p.max_per_stage_descriptor_update_after_bind_samplers = 500000;
            p.max_per_stage_descriptor_update_after_bind_uniform_buffers = 12;
            p.max_per_stage_descriptor_update_after_bind_storage_buffers = 500000;
            p.max_per_stage_descriptor_update_after_bind_sampled_images = 500000;
            p.max_per_stage_descriptor_update_after_bind_storage_images = 500000;
            p.max_per_stage_update_after_bind_resources = 500000;
            p.max_descriptor_set_update_after_bind_samplers = 500000;
            p.max_descriptor_set_update_after_bind_uniform_buffers = 72;
            p.max_descriptor_set_update_after_bind_storage_buffers = 500000;
            p.max_descriptor_set_update_after_bind_sampled_images = 500000;
            p.max_descriptor_set_update_after_bind_storage_images = 500000;
            p.supported_depth_resolve_modes =
                vk::ResolveModeFlags::SAMPLE_ZERO | vk::ResolveModeFlags::AVERAGE;
            p.supported_stencil_resolve_modes = vk::ResolveModeFlags::SAMPLE_ZERO;
            p.independent_resolve_none = vk::TRUE;
            p.independent_resolve = vk::TRUE;
            p.max_timeline_semaphore_value_difference = 2147483647;
        }
        Record::Vulkan13Properties(p) => {
            p.min_subgroup_size = 4;
            p.max_subgroup_size = 4;
            p.max_compute_workgroup_subgroups = 16;
            p.max_inline_uniform_block_size = 256;
            p.max_per_stage_descriptor_inline_uniform_blocks = 4;
            p.max_buffer_size = 1073741824;
        }
        _ => {}
    }
}

fn compare_properties(rec: &Record) -> bool {
    match rec {
        Record::Properties2(r) => {
            let l = &r.properties.limits;
            compare::gte(l.max_image_dimension1_d, 8192)
                && compare::gte(l.max_image_dimension2_d, 8192)
                && compare::gte(l.max_image_dimension_cube, 8192)
                && compare::gte(l.max_image_array_layers, 2048)
                && compare::gte(l.max_uniform_buffer_range, 65536)
                && compare::lte(l.buffer_image_granularity, 4096)
                && compare::gte(l.max_sampler_lod_bias, 14.0)
                && compare::gte(l.max_bound_descriptor_sets, 7)
                && compare::gte(l.max_per_stage_descriptor_samplers, 64)
                && compare::gte(l.max_per_stage_descriptor_uniform_buffers, 15)
                && compare::gte(l.max_per_stage_descriptor_storage_buffers, 30)
                && compare::gte(l.max_per_stage_descriptor_sampled_images, 200)
                && compare::gte(l.max_per_stage_descriptor_storage_images, 16)
                && compare::gte(l.max_per_stage_resources, 200)
                && compare::gte(l.max_descriptor_set_samplers, 576)
                && compare::gte(l.max_descriptor_set_uniform_buffers, 90)
                && compare::gte(l.max_descriptor_set_storage_buffers, 96)
                && compare::gte(l.max_descriptor_set_sampled_images, 1800)
                && compare::gte(l.max_descriptor_set_storage_images, 144)
                && compare::gte(l.max_fragment_combined_output_resources, 16)
                && compare::gte(l.max_compute_work_group_invocations, 256)
                && compare::gte(l.sub_pixel_precision_bits, 8)
                && compare::gte(l.mipmap_precision_bits, 6)
                && compare::gte(l.max_sampler_anisotropy, 16.0)
                && compare::gte(l.max_color_attachments, 7)
                && compare::aligned(l.min_uniform_buffer_offset_alignment, 256)
                && compare::aligned(l.min_storage_buffer_offset_alignment, 64)
                && compare::feature(l.standard_sample_locations)
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
                && compare::gte(p.max_multiview_view_count, 6)
                && compare::gte(p.max_multiview_instance_index, 134217727)
                && compare::gte(p.max_per_set_descriptors, 700)
                && compare::gte(p.max_memory_allocation_size, 2147483648)
        }
        Record::Vulkan12Properties(p) => {
            compare::feature(p.shader_signed_zero_inf_nan_preserve_float16)
                && compare::feature(p.shader_signed_zero_inf_nan_preserve_float32)
                && compare::gte(p.max_per_stage_descriptor_update_after_bind_samplers, 500000)
                && compare::gte(
                    p.max_per_stage_descriptor_update_after_bind_uniform_buffers,
                    12,
                )
                && compare::gte(
                    p.max_per_stage_descriptor_update_after_bind_storage_buffers,
                    500000,
                )
                && compare::gte(
                    p.max_per_stage_descriptor_update_after_bind_sampled_images,
                    500000,
                )
                && compare::gte(
                    p.max_per_stage_descriptor_update_after_bind_storage_images,
                    500000,
                )
                && compare::gte(p.max_per_stage_update_after_bind_resources, 500000)
                && compare::gte(p.max_descriptor_set_update_after_bind_samplers, 500000)
                && compare::gte(p.max_descriptor_set_update_after_bind_uniform_buffers, 72)
                && compare::gte(
                    p.max_descriptor_set_update_after_bind_storage_buffers,
                    500000,
                )
                && compare::gte(
                    p.max_descriptor_set_update_after_bind_sampled_images,
                    500000,
                )
                && compare::gte(
                    p.max_descriptor_set_update_after_bind_storage_images,
                    500000,
                )
                && p.supported_depth_resolve_modes
                    .contains(vk::ResolveModeFlags::SAMPLE_ZERO | vk::ResolveModeFlags::AVERAGE)
                && p.supported_stencil_resolve_modes
                    .contains(vk::ResolveModeFlags::SAMPLE_ZERO)
                && compare::feature(p.independent_resolve_none)
                && compare::feature(p.independent_resolve)
                && compare::gte(p.max_timeline_semaphore_value_difference, 2147483647)
        }
        Record::Vulkan13Properties(p) => {
            compare::lte(p.min_subgroup_size, 4)
                && compare::gte(p.max_subgroup_size, 4)
                && compare::gte(p.max_compute_workgroup_subgroups, 16)
                && compare::gte(p.max_inline_uniform_block_size, 256)
                && compare::gte(p.max_per_stage_descriptor_inline_uniform_blocks, 4)
                && compare::gte(p.max_buffer_size, 1073741824)
        }
        _ => true,
    }
}

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
    let mut vulkan_1_2 = vk::PhysicalDeviceVulkan12Properties::default();
    let mut vulkan_1_3 = vk::PhysicalDeviceVulkan13Properties::default();
    unsafe {
        chain::append(head, &mut vulkan_1_1 as *mut _ as ChainNode);
        chain::append(head, &mut vulkan_1_2 as *mut _ as ChainNode);
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

unsafe fn format_chain(head: ChainNode, cb: &mut dyn FnMut(ChainNode)) {
    cb(head);
}

pub(crate) static DESC: ProfileDesc = ProfileDesc {
    props: PROPS,
    min_api_version: vk::make_api_version(0, 1, 3, 204),
    instance_extensions: &[],
    device_extensions: &[],
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
    queue_families: &[],
    queue_family_struct_types: &[],
    formats: &[],
    format_struct_types: &[],
    feature_chain,
    property_chain,
    queue_family_chain,
    format_chain,
};
