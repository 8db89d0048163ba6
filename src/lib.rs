// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Personal portfolio viewer.
//!
//! Shows a biography, work history, projects and blog posts, with a contact
//! form that delivers messages through a backend or an email relay. Lists
//! start as built-in content and are replaced by remote data when it loads.

pub mod app;
pub mod content;
pub mod io;
pub mod models;
pub mod submission;
pub mod ui;
pub mod util;

#[cfg(feature = "api")]
pub mod server;
