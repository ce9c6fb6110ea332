#![allow(non_snake_case)]

mod app;
mod components;
mod content;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global reduced-motion preference, set from command line
static REDUCE_MOTION: OnceLock<bool> = OnceLock::new();

/// Whether animations should be suppressed this session
pub fn reduce_motion() -> bool {
    REDUCE_MOTION.get().copied().unwrap_or(false)
}

/// Lovenote - an interactive Valentine card
#[derive(Parser, Debug)]
#[command(name = "lovenote")]
#[command(about = "Lovenote - an animated Valentine card with a quiz-gated letter")]
struct Args {
    /// Disable twinkle/float/pulse animations, floating hearts, and the
    /// cursor parallax
    #[arg(long)]
    reduce_motion: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let _ = REDUCE_MOTION.set(args.reduce_motion);

    tracing::info!(
        reduce_motion = args.reduce_motion,
        width = args.width,
        height = args.height,
        "Starting Lovenote"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Sabelo \u{2192} Peggy \u{2014} Valentine")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
