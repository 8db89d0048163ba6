// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Contact section: owner contact details and the message form.

use crate::models::contact::{ContactForm, SubmissionStatus};
use crate::models::profile::Profile;

/// Result of contact form interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    None,
    Submit,
}

/// Mutable form plus the submission state it is rendered against.
pub struct ContactPanel<'a> {
    pub form: &'a mut ContactForm,
    pub status: SubmissionStatus,
    pub can_submit: bool,
    /// User-facing reason for the current error status.
    pub error: Option<&'static str>,
}

/// Label of the submit button for the given status.
pub fn submit_label(status: SubmissionStatus) -> &'static str {
    if status.is_pending() {
        "Sending..."
    } else {
        "Send Message"
    }
}

/// Display the contact section and handle form input.
pub fn show(ui: &mut egui::Ui, profile: &Profile, panel: ContactPanel<'_>) -> ContactAction {
    let mut action = ContactAction::None;

    ui.add_space(8.0);
    ui.heading(egui::RichText::new("Get In Touch").size(24.0).strong());
    ui.add_space(8.0);

    egui::Grid::new("contact_info").num_columns(2).show(ui, |ui| {
        ui.label(egui::RichText::new("Email").weak());
        ui.hyperlink_to(profile.email.as_str(), profile.mailto());
        ui.end_row();
    });

    ui.horizontal(|ui| {
        for link in &profile.social {
            ui.hyperlink_to(link.label.as_str(), &link.url);
        }
    });

    ui.add_space(12.0);

    let ContactPanel {
        form,
        status,
        can_submit,
        error,
    } = panel;
    let editable = !status.is_pending();

    ui.add_enabled(
        editable,
        egui::TextEdit::singleline(&mut form.name)
            .hint_text("Name")
            .desired_width(f32::INFINITY),
    );
    ui.add_enabled(
        editable,
        egui::TextEdit::singleline(&mut form.email)
            .hint_text("Email")
            .desired_width(f32::INFINITY),
    );
    ui.add_enabled(
        editable,
        egui::TextEdit::multiline(&mut form.message)
            .hint_text("Message")
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(can_submit, egui::Button::new(submit_label(status)))
            .clicked()
        {
            action = ContactAction::Submit;
        }

        if status.is_pending() {
            ui.spinner();
        }

        match status {
            SubmissionStatus::Success => {
                ui.colored_label(egui::Color32::from_rgb(74, 222, 128), "Message sent!");
            }
            SubmissionStatus::Error => {
                let text = error.unwrap_or("Message could not be sent.");
                ui.colored_label(egui::Color32::from_rgb(248, 113, 113), text);
            }
            SubmissionStatus::Idle | SubmissionStatus::Pending => {}
        }
    });

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(SubmissionStatus::Idle), "Send Message");
        assert_eq!(submit_label(SubmissionStatus::Pending), "Sending...");
        assert_eq!(submit_label(SubmissionStatus::Error), "Send Message");
    }
}
