#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use cardgen_core::EditorConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Global editor configuration, set from command line
static CONFIG: OnceLock<EditorConfig> = OnceLock::new();

/// Design id requested with --edit
static INIT_EDIT: OnceLock<Option<String>> = OnceLock::new();

/// Get the editor configuration (set from command line or default)
pub fn get_config() -> EditorConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Get the design id to open on launch, if any
pub fn get_init_edit() -> Option<String> {
    INIT_EDIT.get().cloned().flatten()
}

/// CardGen - business card designer
#[derive(Parser, Debug)]
#[command(name = "cardgen-desktop")]
#[command(about = "CardGen - design, save and export business cards")]
struct Args {
    /// Data directory for the design store
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Directory exported images are written to (default: Downloads)
    #[arg(short, long)]
    export_dir: Option<PathBuf>,

    /// Open a saved design for editing by id
    #[arg(long)]
    edit: Option<String>,

    /// QR rendering endpoint
    #[arg(long)]
    qr_endpoint: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = EditorConfig::default();
    if let Some(dir) = args.data_dir {
        config = config.with_data_dir(dir);
    }
    if let Some(dir) = args.export_dir {
        config = config.with_export_dir(dir);
    }
    if let Some(endpoint) = args.qr_endpoint {
        config = config.with_qr_endpoint(endpoint);
    }

    tracing::info!(
        "Starting CardGen with store {:?}, exports to {:?}",
        config.store_path(),
        config.export_dir
    );

    let _ = CONFIG.set(config);
    let _ = INIT_EDIT.set(args.edit);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("CardGen")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 760.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
