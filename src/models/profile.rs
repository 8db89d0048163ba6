// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Owner profile shown on the home, resume and contact views.

/// A labelled outbound link (GitHub, LinkedIn, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// An education entry on the resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub duration: String,
    pub note: String,
}

/// Everything about the site owner that is not a content list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    /// Biography paragraphs for the home view.
    pub bio: Vec<String>,
    pub email: String,
    pub social: Vec<SocialLink>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
}

impl Profile {
    /// Footer line, e.g. "© 2025 Alex Morgan".
    pub fn copyright(&self, year: i32) -> String {
        format!("© {} {}", year, self.name)
    }

    /// `mailto:` link for the contact email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
