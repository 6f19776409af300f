// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, ValueEnum};
use image_input::app::{AppModel, Flags};
use image_input::constants::ui;
use image_input::i18n;
use image_input::input::ImageSource;

#[derive(Parser)]
#[command(name = "image-input")]
#[command(about = "Image attachment picker for the COSMIC desktop")]
#[command(version)]
struct Cli {
    /// Image source selected at startup (overrides the configured default)
    #[arg(short, long, value_enum)]
    source: Option<SourceArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    /// Capture a new photo with a camera
    Camera,
    /// Pick an existing image from the library
    Library,
}

impl From<SourceArg> for ImageSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Camera => ImageSource::Camera,
            SourceArg::Library => ImageSource::Library,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=image_input=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(ui::MIN_WINDOW_WIDTH)
            .min_height(ui::MIN_WINDOW_HEIGHT),
    );

    let flags = Flags {
        source_override: cli.source.map(ImageSource::from),
    };

    // Starts the application's event loop with the CLI overrides as flags.
    cosmic::app::run::<AppModel>(settings, flags)?;

    Ok(())
}
