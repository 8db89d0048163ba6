// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio - personal portfolio viewer
//!
//! A desktop application presenting a biography, work history, projects and
//! blog posts, with a contact form.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use portfolio::app::PortfolioApp;
use portfolio::io::config::{Config, ContentMode};
use portfolio::io::contact::transport_from_config;
use portfolio::io::loader::{ContentSource, HttpSource};
use portfolio::models::navigation::NavigationMode;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Personal portfolio viewer", long_about = None)]
#[command(version)]
struct Cli {
    /// YAML configuration file
    #[arg(long, env = "PORTFOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL of the content API
    #[arg(long)]
    api_base: Option<String>,

    /// Navigation mode: tabs or scroll_spy
    #[arg(long)]
    navigation: Option<NavigationMode>,

    /// Fetch lists from the content API instead of using built-in content
    #[arg(long)]
    remote: bool,
}

fn load_config(cli: Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env()?;

    if let Some(base) = cli.api_base {
        config.api_base = Some(base);
    }
    if let Some(mode) = cli.navigation {
        config.navigation = mode;
    }
    if cli.remote {
        config.content = ContentMode::Remote;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = load_config(Cli::parse())?;

    let transport = transport_from_config(&config).context("Failed to set up contact transport")?;
    let source: Option<Arc<dyn ContentSource>> = match config.content {
        ContentMode::Static => None,
        ContentMode::Remote => Some(Arc::new(
            HttpSource::new(config.request_timeout()).context("Failed to set up content client")?,
        )),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("Portfolio"),
        ..Default::default()
    };

    eframe::run_native(
        "Portfolio",
        options,
        Box::new(move |_cc| Ok(Box::new(PortfolioApp::new(&config, transport, source)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
