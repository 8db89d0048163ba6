// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio content API server.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use portfolio::content::SiteContent;
use portfolio::io::serialization::import_content;

#[derive(Parser)]
#[command(name = "portfolio-api")]
#[command(about = "Serve portfolio content and receive contact messages", long_about = None)]
#[command(version)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:8000")]
    bind: SocketAddr,

    /// YAML or JSON file replacing the built-in content
    #[arg(long)]
    content: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let content = match cli.content {
        Some(path) => import_content(&path)?,
        None => SiteContent::fallback(),
    };

    portfolio::server::serve(cli.bind, content).await
}
