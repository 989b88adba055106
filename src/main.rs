#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod hooks;
mod pages;
mod theme;

use std::sync::OnceLock;

use capflow_core::DEFAULT_API_URL;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global platform endpoint, set from command line
static API_URL: OnceLock<String> = OnceLock::new();

/// Get the platform API endpoint (set from command line or default)
pub fn api_url() -> String {
    API_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// CapFlow - procurement finance platform client
#[derive(Parser, Debug)]
#[command(name = "capflow-desktop")]
#[command(about = "CapFlow - procurement finance platform desktop client")]
struct Args {
    /// Platform API endpoint (e.g. https://api.capflow.example)
    #[arg(long)]
    api_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let api_url = args.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let _ = API_URL.set(api_url.clone());

    tracing::info!("Starting CapFlow client against {}", api_url);

    // Wide enough for the admin table, tall enough for the user form
    let window_width = 1200.0;
    let window_height = 840.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("CapFlow")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
