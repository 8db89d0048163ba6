// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Content file import.
//!
//! This module reads a complete set of content lists from a YAML or JSON
//! file, chosen by extension.

use std::path::Path;

use anyhow::{bail, Result};

use crate::content::SiteContent;

/// Import content from YAML format.
pub fn import_yaml(path: &Path) -> Result<SiteContent> {
    let yaml = std::fs::read_to_string(path)?;
    let content = serde_yaml::from_str(&yaml)?;
    Ok(content)
}

/// Import content from JSON format.
pub fn import_json(path: &Path) -> Result<SiteContent> {
    let json = std::fs::read_to_string(path)?;
    let content = serde_json::from_str(&json)?;
    Ok(content)
}

/// Import content, picking the format from the file extension.
///
/// Every list in the file must be non-empty.
pub fn import_content(path: &Path) -> Result<SiteContent> {
    let extension = path.extension().and_then(|s| s.to_str());
    let content = match extension {
        Some("yaml") | Some("yml") => import_yaml(path)?,
        Some("json") => import_json(path)?,
        _ => bail!("Unsupported file extension: {:?}", extension),
    };

    if content.projects.is_empty() || content.experiences.is_empty() || content.blog_posts.is_empty() {
        bail!("{} leaves a content list empty", path.display());
    }

    log::info!(
        "Imported {} projects, {} experiences and {} posts from {}",
        content.projects.len(),
        content.experiences.len(),
        content.blog_posts.len(),
        path.display()
    );

    Ok(content)
}
