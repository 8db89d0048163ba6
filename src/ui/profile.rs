// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Profile side panel with picture, name and headline.

use crate::models::profile::Profile;

const PICTURE_SIZE: f32 = 160.0;

/// Display the profile panel.
pub fn show(ui: &mut egui::Ui, profile: &Profile, picture: Option<&egui::TextureHandle>) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);

        match picture {
            Some(texture) => {
                ui.add(
                    egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                        .max_width(PICTURE_SIZE)
                        .max_height(PICTURE_SIZE)
                        .rounding(PICTURE_SIZE / 2.0),
                );
            }
            None => {
                // Initials placeholder
                let initials: String = profile
                    .name
                    .split_whitespace()
                    .filter_map(|part| part.chars().next())
                    .collect();
                ui.label(
                    egui::RichText::new(initials)
                        .size(48.0)
                        .color(egui::Color32::from_gray(200)),
                );
            }
        }

        ui.add_space(12.0);
        ui.label(egui::RichText::new(&profile.name).size(22.0).strong());
        ui.label(
            egui::RichText::new(&profile.headline)
                .color(egui::Color32::from_gray(150)),
        );
    });
}
