// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! `PortfolioApp` is the presentation controller: it owns the content
//! lists, navigation state, contact form and submission pipeline, drains
//! the background loaders every frame and decides which view fragment to
//! render.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Datelike;

use crate::content::{fallback, ContentUpdate, SiteContent};
use crate::io::config::Config;
use crate::io::contact::{ContactTransport, SubmitError};
use crate::io::loader::{self, ContentSource};
use crate::io::media::{self, LoadedImage};
use crate::models::{
    contact::ContactForm,
    navigation::{NavigationMode, NavigationState, Section},
    profile::Profile,
};
use crate::submission::SubmissionPipeline;
use crate::ui::{
    contact::{ContactAction, ContactPanel},
    nav, profile, sections,
};
use crate::util::scroll_spy::SectionGeometry;

/// Repaint interval while background work is outstanding.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Vertical space between sections on the scrolling page.
const SECTION_GAP: f32 = 48.0;

fn contact_panel<'a>(form: &'a mut ContactForm, submission: &SubmissionPipeline) -> ContactPanel<'a> {
    ContactPanel {
        status: submission.status(),
        can_submit: submission.can_submit(form),
        error: submission.last_error().map(SubmitError::user_message),
        form,
    }
}

/// Main application state.
pub struct PortfolioApp {
    /// Displayed lists; start as the built-in content
    content: SiteContent,

    profile: Profile,

    /// Active section and how it is driven
    navigation: NavigationState,

    /// Form as currently typed
    contact_form: ContactForm,

    submission: SubmissionPipeline,

    /// Receiver for background content loads
    content_loader: Option<Receiver<ContentUpdate>>,

    /// Receiver for background profile picture decoding
    image_loader: Option<Receiver<Result<LoadedImage, String>>>,

    /// Profile picture texture, once decoded
    picture: Option<egui::TextureHandle>,
}

impl PortfolioApp {
    /// Create the viewer and start its background loads.
    ///
    /// Without a content source the built-in lists are final.
    pub fn new(
        config: &Config,
        transport: Arc<dyn ContactTransport>,
        source: Option<Arc<dyn ContentSource>>,
    ) -> Self {
        let content_loader = match source {
            Some(source) => {
                log::info!(
                    "Loading content from {}",
                    config.api_base.as_deref().unwrap_or("same-origin paths")
                );
                Some(loader::spawn_content_loads(source, config.api_base.clone()))
            }
            None => {
                log::info!("Using built-in content");
                None
            }
        };

        let image_loader = config.profile_image.clone().map(media::spawn_image_load);

        Self {
            content: SiteContent::fallback(),
            profile: fallback::profile(),
            navigation: NavigationState::new(config.navigation),
            contact_form: ContactForm::default(),
            submission: SubmissionPipeline::new(transport, config.reset_delay()),
            content_loader,
            image_loader,
            picture: None,
        }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn contact_form_mut(&mut self) -> &mut ContactForm {
        &mut self.contact_form
    }

    pub fn submission(&self) -> &SubmissionPipeline {
        &self.submission
    }

    /// Whether any content load has not reported yet.
    pub fn is_loading_content(&self) -> bool {
        self.content_loader.is_some()
    }

    /// Navigation bar click.
    pub fn select_section(&mut self, section: Section) {
        log::debug!("Selected section {}", section);
        self.navigation.select(section);
    }

    /// Submit button press.
    pub fn submit_contact(&mut self) {
        if let Err(rejected) = self.submission.submit(&self.contact_form) {
            log::debug!("Submission refused: {}", rejected);
        }
    }

    /// Apply finished content loads. Returns `true` if any list changed.
    pub fn receive_content(&mut self) -> bool {
        let Some(receiver) = self.content_loader.as_ref() else {
            return false;
        };

        let mut updates = Vec::new();
        let mut finished = false;
        loop {
            match receiver.try_recv() {
                Ok(update) => updates.push(update),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    finished = true;
                    break;
                }
            }
        }

        if finished {
            self.content_loader = None;
            log::info!("All content loads finished");
        }

        let changed = !updates.is_empty();
        for update in updates {
            self.content.apply(update);
        }
        changed
    }

    /// Per-frame state update, independent of rendering.
    pub fn tick(&mut self, now: Instant) -> bool {
        let content_changed = self.receive_content();
        let status_changed = self.submission.poll(&mut self.contact_form, now);
        content_changed || status_changed
    }

    /// Check for a decoded profile picture and upload it as a texture.
    fn receive_picture(&mut self, ctx: &egui::Context) {
        let Some(ref receiver) = self.image_loader else {
            return;
        };

        match receiver.try_recv() {
            Ok(Ok(image)) => {
                let color_image = egui::ColorImage::from_rgba_unmultiplied(image.size(), &image.pixels);
                self.picture = Some(ctx.load_texture("profile_picture", color_image, egui::TextureOptions::LINEAR));
                self.image_loader = None;
            }
            Ok(Err(e)) => {
                log::error!("Failed to load profile image: {}", e);
                self.image_loader = None;
            }
            Err(TryRecvError::Disconnected) => {
                self.image_loader = None;
            }
            Err(TryRecvError::Empty) => {}
        }
    }

    /// How soon the next frame is needed when nothing else triggers one.
    fn repaint_after(&self, now: Instant) -> Option<Duration> {
        if self.content_loader.is_some()
            || self.image_loader.is_some()
            || self.submission.status().is_pending()
            || self.navigation.is_pinned()
        {
            return Some(POLL_INTERVAL);
        }

        self.submission
            .reset_due()
            .map(|due| due.saturating_duration_since(now))
    }

    /// Tab mode: only the active section renders.
    fn show_active_section(&mut self, ui: &mut egui::Ui) -> ContactAction {
        let section = self.navigation.active();
        let content = &self.content;
        let profile = &self.profile;
        let form = &mut self.contact_form;
        let submission = &self.submission;

        egui::ScrollArea::vertical()
            .id_source(section.label())
            .auto_shrink([false, false])
            .show(ui, |ui| {
                sections::show(ui, section, content, profile, contact_panel(form, submission))
            })
            .inner
    }

    /// Scroll-spy mode: every section on one page, active section derived
    /// from the scroll offset.
    fn show_scrolling_page(&mut self, ui: &mut egui::Ui) -> ContactAction {
        let scroll_target = self.navigation.take_scroll_request();
        let content = &self.content;
        let profile = &self.profile;
        let form = &mut self.contact_form;
        let submission = &self.submission;

        let output = egui::ScrollArea::vertical()
            .id_source("page")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let origin = ui.min_rect().top();
                let mut geometry = SectionGeometry::default();
                let mut action = ContactAction::None;

                for &section in Section::all() {
                    let scope = ui.scope(|ui| {
                        sections::show(ui, section, content, profile, contact_panel(&mut *form, submission))
                    });

                    let rect = scope.response.rect;
                    geometry.record(section, rect.top() - origin, rect.height());

                    if scroll_target == Some(section) {
                        scope.response.scroll_to_me(Some(egui::Align::TOP));
                    }
                    if scope.inner == ContactAction::Submit {
                        action = ContactAction::Submit;
                    }

                    ui.add_space(SECTION_GAP);
                }

                (geometry, action)
            });

        let (geometry, action) = output.inner;
        if self.navigation.on_scroll(output.state.offset.y, &geometry) {
            log::debug!("Scrolled into {}", self.navigation.active());
        }

        action
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.tick(now);
        self.receive_picture(ctx);

        if let Some(delay) = self.repaint_after(now) {
            ctx.request_repaint_after(delay);
        }

        // Navigation bar
        let clicked = egui::TopBottomPanel::top("navigation")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let clicked = nav::show(ui, self.navigation.active(), self.navigation.mode());
                ui.add_space(4.0);
                clicked
            })
            .inner;

        if let Some(section) = clicked {
            self.select_section(section);
        }

        // Footer
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let year = chrono::Local::now().year();
                ui.label(egui::RichText::new(self.profile.copyright(year)).weak());
            });
        });

        // Profile panel (left side)
        egui::SidePanel::left("profile")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                profile::show(ui, &self.profile, self.picture.as_ref());

                if self.content_loader.is_some() {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.spinner();
                        ui.label(egui::RichText::new("Loading content...").weak());
                    });
                }
            });

        // Main content (center)
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| match self.navigation.mode() {
                NavigationMode::Tabs => self.show_active_section(ui),
                NavigationMode::ScrollSpy => self.show_scrolling_page(ui),
            })
            .inner;

        if action == ContactAction::Submit {
            self.submit_contact();
            ctx.request_repaint();
        }
    }
}
