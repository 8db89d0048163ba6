// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O: configuration, remote content, contact delivery and media files.

pub mod config;
pub mod contact;
pub mod loader;
pub mod media;
pub mod serialization;
