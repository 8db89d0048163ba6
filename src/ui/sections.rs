// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Section views: home, resume, projects and blog.
//!
//! The contact section lives in [`super::contact`] because it is the only
//! one with editable state.

use crate::content::SiteContent;
use crate::models::content::{BlogPost, Experience, Project};
use crate::models::navigation::Section;
use crate::models::profile::Profile;
use crate::ui::contact::{self, ContactAction, ContactPanel};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 170, 190);

/// Render one section. Only the contact section can produce an action.
pub fn show(
    ui: &mut egui::Ui,
    section: Section,
    content: &SiteContent,
    profile: &Profile,
    panel: ContactPanel<'_>,
) -> ContactAction {
    match section {
        Section::Home => home(ui, profile),
        Section::Resume => resume(ui, &content.experiences, profile),
        Section::Projects => projects(ui, &content.projects),
        Section::Blog => blog(ui, &content.blog_posts),
        Section::Contact => return contact::show(ui, profile, panel),
    }
    ContactAction::None
}

fn heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(8.0);
    ui.heading(egui::RichText::new(text).size(24.0).strong());
    ui.add_space(8.0);
}

fn home(ui: &mut egui::Ui, profile: &Profile) {
    ui.add_space(12.0);
    ui.label(egui::RichText::new("Hello").size(40.0).strong().color(ACCENT));
    ui.label(egui::RichText::new("A Bit About Me").size(20.0));
    ui.add_space(8.0);
    for paragraph in &profile.bio {
        ui.label(paragraph.as_str());
        ui.add_space(4.0);
    }
}

fn entry_header(ui: &mut egui::Ui, title: &str, duration: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(title).size(16.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(duration).weak());
        });
    });
}

fn resume(ui: &mut egui::Ui, experiences: &[Experience], profile: &Profile) {
    heading(ui, "Experience");
    for exp in experiences {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            entry_header(ui, &exp.role, &exp.duration);
            ui.label(egui::RichText::new(&exp.company).color(ACCENT));
            ui.label(exp.description.as_str());
        });
        ui.add_space(6.0);
    }

    heading(ui, "Education");
    for edu in &profile.education {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            entry_header(ui, &edu.school, &edu.duration);
            ui.label(egui::RichText::new(&edu.degree).color(ACCENT));
            ui.label(edu.note.as_str());
        });
        ui.add_space(6.0);
    }

    heading(ui, "Skills");
    tags(ui, &profile.skills);
}

fn tags(ui: &mut egui::Ui, items: &[String]) {
    ui.horizontal_wrapped(|ui| {
        let background = ui.visuals().faint_bg_color;
        for item in items {
            ui.label(egui::RichText::new(item).small().background_color(background));
        }
    });
}

fn projects(ui: &mut egui::Ui, projects: &[Project]) {
    heading(ui, "Projects");
    for project in projects {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&project.title).size(16.0).strong());
            ui.label(project.description.as_str());
            tags(ui, &project.technologies);
            ui.horizontal(|ui| {
                if let Some(ref link) = project.link {
                    ui.hyperlink_to("Live →", link);
                }
                if let Some(ref github) = project.github {
                    ui.hyperlink_to("View on GitHub →", github);
                }
            });
        });
        ui.add_space(6.0);
    }
}

fn blog(ui: &mut egui::Ui, posts: &[BlogPost]) {
    heading(ui, "Blog");
    for post in posts {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&post.date).small().weak());
            ui.label(egui::RichText::new(&post.title).size(16.0).strong());
            ui.label(post.excerpt.as_str());
            ui.hyperlink_to("Read More →", &post.link);
        });
        ui.add_space(6.0);
    }
}
