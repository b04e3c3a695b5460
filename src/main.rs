use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use logo_field::{FieldConfig, FilterMode, LogoFieldApp};

/// Scroll- and pointer-reactive field of rotating, pulsing logos.
///
/// Scroll with the mouse wheel to grow the field, move the pointer to push
/// logos away, click to add one, press Enter to jump one screen down.
#[derive(Debug, Parser)]
#[command(name = "logo-field", version)]
struct Cli {
    /// Logo image (PNG or JPEG).
    #[arg(default_value = "logo.jpeg")]
    image: PathBuf,

    /// Logos created by scrolling; clicks allow twice as many.
    #[arg(long, default_value_t = 20)]
    max_logos: usize,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Height of the scrollable page, in window heights.
    #[arg(long, default_value_t = 3.0)]
    page_height: f32,

    /// Disable the Enter-to-scroll indicator.
    #[arg(long)]
    no_scroll_indicator: bool,

    /// Sample the logo with nearest-neighbor filtering (for pixel art).
    #[arg(long)]
    nearest: bool,

    /// Seed for reproducible logo placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    let filter = if cli.nearest {
        FilterMode::Nearest
    } else {
        FilterMode::Linear
    };

    let mut app = LogoFieldApp::new()
        .with_image(&cli.image)
        .with_filter(filter)
        .with_config(FieldConfig::default().with_max_logos(cli.max_logos))
        .with_window_size(cli.width, cli.height)
        .with_page_height(cli.page_height)
        .with_scroll_indicator(!cli.no_scroll_indicator);
    if let Some(seed) = cli.seed {
        app = app.with_seed(seed);
    }

    app.run()
        .with_context(|| format!("logo field with {} failed", cli.image.display()))
}
