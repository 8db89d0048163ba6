// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio content records.
//!
//! This module defines the display records served by the content API and
//! shipped as fallback data: projects, work experience and blog posts.
//! All of them are loaded once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Technology tags, in display order.
    pub technologies: Vec<String>,
    /// Live deployment or demo link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Source repository link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// A position in the work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub company: String,
    pub role: String,
    /// Free text such as "2021 - 2023"; never parsed.
    pub duration: String,
    pub description: String,
}

/// A blog excerpt linking to the full post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    /// Display-only date string.
    pub date: String,
    pub excerpt: String,
    pub link: String,
}
