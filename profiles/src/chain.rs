// Copyright 2026 The vk-profiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Record chains
//!
//! Every Vulkan output record starts with `(VkStructureType, void* pNext)`,
//! which `ash` exposes as [`vk::BaseOutStructure`].  This module walks those
//! chains and converts a raw node into [`Record`], a tagged view over every
//! record kind the engine fills or compares.  Kinds the engine has no layout
//! interest in land in [`Record::Other`] and every dispatch arm ignores them,
//! so callers may pass chains mixing profile-relevant and unrelated records.
//!
//! The engine never owns chain storage; the caller does.

use ash::vk;

/// A raw node in a caller-owned `pNext` chain.
pub(crate) type ChainNode = *mut vk::BaseOutStructure<'static>;

/// Walks `head` and every record linked behind it.  The callback may relink
/// the node's tail, so the successor is read before the callback runs.
pub(crate) unsafe fn walk(head: ChainNode, mut f: impl FnMut(ChainNode)) {
    let mut node = head;
    while !node.is_null() {
        let next = unsafe { (*node).p_next };
        f(node);
        node = next;
    }
}

/// First record in the chain with the given structure type, or null.
pub(crate) unsafe fn find(head: ChainNode, s_type: vk::StructureType) -> ChainNode {
    let mut node = head;
    while !node.is_null() {
        if unsafe { (*node).s_type } == s_type {
            return node;
        }
        node = unsafe { (*node).p_next };
    }
    std::ptr::null_mut()
}

/// Links `tail` onto the end of the chain starting at `head`.
pub(crate) unsafe fn append(head: ChainNode, tail: ChainNode) {
    let mut node = head;
    unsafe {
        while !(*node).p_next.is_null() {
            node = (*node).p_next;
        }
        (*node).p_next = tail;
    }
}

/// Tagged view of one chain record.  The discriminants are the Vulkan
/// structure-type codes, preserved bit-for-bit for the loader ABI.
pub(crate) enum Record<'a> {
    Features2(&'a mut vk::PhysicalDeviceFeatures2<'static>),
    Vulkan11Features(&'a mut vk::PhysicalDeviceVulkan11Features<'static>),
    Vulkan12Features(&'a mut vk::PhysicalDeviceVulkan12Features<'static>),
    Vulkan13Features(&'a mut vk::PhysicalDeviceVulkan13Features<'static>),
    DynamicRenderingFeatures(&'a mut vk::PhysicalDeviceDynamicRenderingFeatures<'static>),
    Synchronization2Features(&'a mut vk::PhysicalDeviceSynchronization2Features<'static>),
    ImageRobustnessFeatures(&'a mut vk::PhysicalDeviceImageRobustnessFeatures<'static>),
    Robustness2Features(&'a mut vk::PhysicalDeviceRobustness2FeaturesEXT<'static>),
    Properties2(&'a mut vk::PhysicalDeviceProperties2<'static>),
    Vulkan11Properties(&'a mut vk::PhysicalDeviceVulkan11Properties<'static>),
    Vulkan12Properties(&'a mut vk::PhysicalDeviceVulkan12Properties<'static>),
    Vulkan13Properties(&'a mut vk::PhysicalDeviceVulkan13Properties<'static>),
    FormatProperties2(&'a mut vk::FormatProperties2<'static>),
    FormatProperties3(&'a mut vk::FormatProperties3<'static>),
    QueueFamilyProperties2(&'a mut vk::QueueFamilyProperties2<'static>),
    /// A record the engine does not interpret.  Fillers and comparators
    /// no-op on it.
    Other(ChainNode),
}

impl<'a> Record<'a> {
    /// Views a raw chain node through the tag its structure type selects.
    ///
    /// # Safety
    ///
    /// `node` must point to a live record whose layout matches its declared
    /// structure type, exclusively reachable for `'a`.
    pub(crate) unsafe fn from_base(node: ChainNode) -> Record<'a> {
        use vk::StructureType as S;
        unsafe {
            match (*node).s_type {
                S::PHYSICAL_DEVICE_FEATURES_2 => Record::Features2(&mut *node.cast()),
                S::PHYSICAL_DEVICE_VULKAN_1_1_FEATURES => {
                    Record::Vulkan11Features(&mut *node.cast())
                }
                S::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES => {
                    Record::Vulkan12Features(&mut *node.cast())
                }
                S::PHYSICAL_DEVICE_VULKAN_1_3_FEATURES => {
                    Record::Vulkan13Features(&mut *node.cast())
                }
                S::PHYSICAL_DEVICE_DYNAMIC_RENDERING_FEATURES => {
                    Record::DynamicRenderingFeatures(&mut *node.cast())
                }
                S::PHYSICAL_DEVICE_SYNCHRONIZATION_2_FEATURES => {
                    Record::Synchronization2Features(&mut *node.cast())
                }
                S::PHYSICAL_DEVICE_IMAGE_ROBUSTNESS_FEATURES => {
                    Record::ImageRobustnessFeatures(&mut *node.cast())
                }
                S::PHYSICAL_DEVICE_ROBUSTNESS_2_FEATURES_EXT => {
                    Record::Robustness2Features(&mut *node.cast())
                }
                S::PHYSICAL_DEVICE_PROPERTIES_2 => Record::Properties2(&mut *node.cast()),
                S::PHYSICAL_DEVICE_VULKAN_1_1_PROPERTIES => {
                    Record::Vulkan11Properties(&mut *node.cast())
                }
                S::PHYSICAL_DEVICE_VULKAN_1_2_PROPERTIES => {
                    Record::Vulkan12Properties(&mut *node.cast())
                }
                S::PHYSICAL_DEVICE_VULKAN_1_3_PROPERTIES => {
                    Record::Vulkan13Properties(&mut *node.cast())
                }
                S::FORMAT_PROPERTIES_2 => Record::FormatProperties2(&mut *node.cast()),
                S::FORMAT_PROPERTIES_3 => Record::FormatProperties3(&mut *node.cast()),
                S::QUEUE_FAMILY_PROPERTIES_2 => Record::QueueFamilyProperties2(&mut *node.cast()),
                _ => Record::Other(node),
            }
        }
    }

    pub(crate) fn s_type(&self) -> vk::StructureType {
        use vk::StructureType as S;
        match self {
            Record::Features2(_) => S::PHYSICAL_DEVICE_FEATURES_2,
            Record::Vulkan11Features(_) => S::PHYSICAL_DEVICE_VULKAN_1_1_FEATURES,
            Record::Vulkan12Features(_) => S::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
            Record::Vulkan13Features(_) => S::PHYSICAL_DEVICE_VULKAN_1_3_FEATURES,
            Record::DynamicRenderingFeatures(_) => S::PHYSICAL_DEVICE_DYNAMIC_RENDERING_FEATURES,
            Record::Synchronization2Features(_) => S::PHYSICAL_DEVICE_SYNCHRONIZATION_2_FEATURES,
            Record::ImageRobustnessFeatures(_) => S::PHYSICAL_DEVICE_IMAGE_ROBUSTNESS_FEATURES,
            Record::Robustness2Features(_) => S::PHYSICAL_DEVICE_ROBUSTNESS_2_FEATURES_EXT,
            Record::Properties2(_) => S::PHYSICAL_DEVICE_PROPERTIES_2,
            Record::Vulkan11Properties(_) => S::PHYSICAL_DEVICE_VULKAN_1_1_PROPERTIES,
            Record::Vulkan12Properties(_) => S::PHYSICAL_DEVICE_VULKAN_1_2_PROPERTIES,
            Record::Vulkan13Properties(_) => S::PHYSICAL_DEVICE_VULKAN_1_3_PROPERTIES,
            Record::FormatProperties2(_) => S::FORMAT_PROPERTIES_2,
            Record::FormatProperties3(_) => S::FORMAT_PROPERTIES_3,
            Record::QueueFamilyProperties2(_) => S::QUEUE_FAMILY_PROPERTIES_2,
            Record::Other(node) => unsafe { (**node).s_type },
        }
    }
}
