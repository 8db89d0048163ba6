// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Section navigation bar.
//!
//! This module provides the row of section buttons shown above the
//! content, with the active section highlighted.

use crate::models::navigation::{NavigationMode, Section};

/// Display the navigation bar. Returns the section the user clicked.
pub fn show(ui: &mut egui::Ui, active: Section, mode: NavigationMode) -> Option<Section> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for &section in Section::all() {
            let label = egui::RichText::new(section.label()).size(15.0);
            if ui.selectable_label(active == section, label).clicked() {
                clicked = Some(section);
            }
        }

        ui.separator();

        let hint = match mode {
            NavigationMode::Tabs => "Select a section to view it",
            NavigationMode::ScrollSpy => "Scroll or jump to a section",
        };
        ui.label(egui::RichText::new(hint).italics().weak());
    });

    clicked
}
