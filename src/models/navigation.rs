// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Navigation state.
//!
//! The active section is either chosen explicitly from the tab bar or
//! derived from the scroll position (scroll-spy). Either way exactly one
//! [`Section`] is active at any time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::util::scroll_spy::{self, SectionGeometry};

/// Logical sections of the portfolio, in page order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Resume,
    Projects,
    Blog,
    Contact,
}

impl Section {
    /// Get all sections in page order
    pub const fn all() -> &'static [Section] {
        &[
            Self::Home,
            Self::Resume,
            Self::Projects,
            Self::Blog,
            Self::Contact,
        ]
    }

    /// Get display name for the section
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Resume => "Resume",
            Self::Projects => "Projects",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the active section is driven.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationMode {
    /// One view at a time, switched from the tab bar.
    #[default]
    Tabs,
    /// All sections on one scrolling page, active section follows the scroll.
    ScrollSpy,
}

impl FromStr for NavigationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tabs" => Ok(Self::Tabs),
            "scroll_spy" | "scroll-spy" | "scroll" => Ok(Self::ScrollSpy),
            other => Err(format!("unknown navigation mode: {other}")),
        }
    }
}

/// Click override held while the view scrolls to the clicked section.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollPin {
    target: Section,
    /// Offset on the previous frame of the scroll
    last_offset: Option<f32>,
}

/// Which section is active, and how it got there.
#[derive(Debug, Clone)]
pub struct NavigationState {
    mode: NavigationMode,
    active: Section,
    /// Section the user clicked in scroll-spy mode that the view has not
    /// been asked to scroll to yet.
    scroll_request: Option<Section>,
    /// Clicked section kept active until the scroll to it has finished.
    pin: Option<ScrollPin>,
    /// Offset seen by the last scroll update.
    last_offset: Option<f32>,
}

impl NavigationState {
    /// Start on the home section.
    pub fn new(mode: NavigationMode) -> Self {
        Self {
            mode,
            active: Section::Home,
            scroll_request: None,
            pin: None,
            last_offset: None,
        }
    }

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Explicit selection from the navigation bar.
    ///
    /// In scroll-spy mode this is a momentary override that also asks the
    /// view to scroll the section into place. The clicked section stays
    /// active until that scroll has finished.
    pub fn select(&mut self, section: Section) {
        self.active = section;
        if self.mode == NavigationMode::ScrollSpy {
            self.scroll_request = Some(section);
            self.pin = Some(ScrollPin {
                target: section,
                last_offset: None,
            });
        }
    }

    /// Hand the pending scroll target to the view, once.
    pub fn take_scroll_request(&mut self) -> Option<Section> {
        self.scroll_request.take()
    }

    /// Whether a clicked section is still overriding the scroll position.
    pub fn is_pinned(&self) -> bool {
        self.pin.is_some()
    }

    /// Recompute the active section from the scroll offset.
    ///
    /// Returns `true` when the active section changed. Ignored in tab mode
    /// and before the first layout. After a click the clicked section is
    /// held until the probe lands in it or the offset stops moving; a
    /// section the page cannot scroll far enough to reach stays active
    /// until the next scroll. When no section contains the probe position
    /// the current value is kept.
    pub fn on_scroll(&mut self, offset: f32, geometry: &SectionGeometry) -> bool {
        if self.mode != NavigationMode::ScrollSpy || geometry.is_empty() {
            return false;
        }

        let previous = self.last_offset.replace(offset);
        if self.scroll_request.is_some() {
            return false;
        }

        if let Some(pin) = self.pin.as_mut() {
            let landed = scroll_spy::active_section(offset, geometry) == Some(pin.target);
            let settled = pin.last_offset == Some(offset);
            pin.last_offset = Some(offset);
            if landed || settled {
                log::debug!("Scroll to {} finished", pin.target);
                self.pin = None;
            }
            return false;
        }

        if previous == Some(offset) {
            return false;
        }

        match scroll_spy::active_section(offset, geometry) {
            Some(section) if section != self.active => {
                self.active = section;
                true
            }
            _ => false,
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(NavigationMode::default())
    }
}
