// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scroll-spy derivation.
//!
//! This module maps a vertical scroll offset onto the section whose
//! vertical extent contains a probe point just below the top of the
//! viewport. It is a pure function of the offset and the section geometry
//! recorded during the previous layout pass.

use crate::models::navigation::Section;

/// Distance below the scroll offset at which sections are probed.
pub const SCROLL_PROBE_OFFSET: f32 = 100.0;

/// Vertical extent of one section, relative to the top of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub section: Section,
    pub top: f32,
    pub height: f32,
}

impl SectionExtent {
    /// Half-open containment: `top <= y < top + height`.
    pub fn contains(&self, y: f32) -> bool {
        self.top <= y && y < self.top + self.height
    }
}

/// Ordered table of section extents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionGeometry {
    extents: Vec<SectionExtent>,
}

impl SectionGeometry {
    /// Record (or replace) the extent of a section, keeping insertion order.
    pub fn record(&mut self, section: Section, top: f32, height: f32) {
        let extent = SectionExtent { section, top, height };
        match self.extents.iter_mut().find(|e| e.section == section) {
            Some(existing) => *existing = extent,
            None => self.extents.push(extent),
        }
    }

    /// Nothing laid out yet.
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionExtent> {
        self.extents.iter()
    }
}

/// Section under the probe point for the given scroll offset.
///
/// The first section in order whose extent contains
/// `offset + SCROLL_PROBE_OFFSET` wins. Returns `None` when no section
/// contains the probe.
pub fn active_section(offset: f32, geometry: &SectionGeometry) -> Option<Section> {
    let probe = offset + SCROLL_PROBE_OFFSET;
    geometry
        .iter()
        .find(|extent| extent.contains(probe))
        .map(|extent| extent.section)
}
