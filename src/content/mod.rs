// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio content and where it comes from.
//!
//! Content starts as the built-in [`fallback`] tables and may be replaced,
//! one list at a time, by whatever the remote loader delivers.

pub mod fallback;

use serde::{Deserialize, Serialize};

use crate::models::content::{BlogPost, Experience, Project};

/// The independently loaded content lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Projects,
    Experiences,
    Blog,
}

impl ContentKind {
    pub const fn all() -> &'static [ContentKind] {
        &[Self::Projects, Self::Experiences, Self::Blog]
    }

    /// API path serving this list.
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Projects => "/api/projects",
            Self::Experiences => "/api/experiences",
            Self::Blog => "/api/blog",
        }
    }
}

/// A single list delivered by a content load.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentUpdate {
    Projects(Vec<Project>),
    Experiences(Vec<Experience>),
    Blog(Vec<BlogPost>),
}

impl ContentUpdate {
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Projects(_) => ContentKind::Projects,
            Self::Experiences(_) => ContentKind::Experiences,
            Self::Blog(_) => ContentKind::Blog,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Projects(items) => items.len(),
            Self::Experiences(items) => items.len(),
            Self::Blog(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// All display lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    #[serde(rename = "blog")]
    pub blog_posts: Vec<BlogPost>,
}

impl SiteContent {
    /// Built-in content.
    pub fn fallback() -> Self {
        Self {
            projects: fallback::projects(),
            experiences: fallback::experiences(),
            blog_posts: fallback::blog_posts(),
        }
    }

    /// Replace one list. Empty updates are ignored so no list ever becomes
    /// empty.
    pub fn apply(&mut self, update: ContentUpdate) {
        if update.is_empty() {
            log::warn!("Ignoring empty {:?} update", update.kind());
            return;
        }

        match update {
            ContentUpdate::Projects(items) => self.projects = items,
            ContentUpdate::Experiences(items) => self.experiences = items,
            ContentUpdate::Blog(items) => self.blog_posts = items,
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u32) -> BlogPost {
        BlogPost {
            id,
            title: format!("Post {id}"),
            date: "2024-01-01".to_string(),
            excerpt: "Excerpt".to_string(),
            link: "#".to_string(),
        }
    }

    #[test]
    fn test_apply_replaces_only_its_list() {
        let mut content = SiteContent::fallback();
        content.apply(ContentUpdate::Blog(vec![post(42)]));

        assert_eq!(content.blog_posts, vec![post(42)]);
        assert_eq!(content.projects, fallback::projects());
        assert_eq!(content.experiences, fallback::experiences());
    }

    #[test]
    fn test_apply_ignores_empty_update() {
        let mut content = SiteContent::fallback();
        content.apply(ContentUpdate::Projects(Vec::new()));

        assert_eq!(content.projects, fallback::projects());
    }

    #[test]
    fn test_paths() {
        let paths: Vec<&str> = ContentKind::all().iter().map(|k| k.path()).collect();
        assert_eq!(paths, vec!["/api/projects", "/api/experiences", "/api/blog"]);
    }
}
