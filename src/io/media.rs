// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Profile picture loading.
//!
//! This module decodes image files into RGBA pixels suitable for an egui
//! texture. Decoding runs on a background thread so a large photo never
//! stalls the first frames.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};

use anyhow::{Context, Result};

/// Decoded image data, RGBA8 row-major.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl LoadedImage {
    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }
}

/// Decode an image file.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let image = image::open(path)
        .with_context(|| format!("failed to decode {}", path.display()))?
        .to_rgba8();

    Ok(LoadedImage {
        width: image.width(),
        height: image.height(),
        pixels: image.into_raw(),
    })
}

/// Decode an image file on a background thread.
pub fn spawn_image_load(path: PathBuf) -> Receiver<Result<LoadedImage, String>> {
    let (sender, receiver) = channel();

    std::thread::spawn(move || {
        let result = load_image(&path).map_err(|e| format!("{:#}", e));
        if let Ok(ref image) = result {
            log::info!("Loaded profile image: {} ({}x{})", path.display(), image.width, image.height);
        }
        let _ = sender.send(result);
    });

    receiver
}
