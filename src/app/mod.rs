// SPDX-License-Identifier: GPL-3.0-only

//! Main application module for Image Input
//!
//! This module contains the application state, message handling, and UI
//! rendering for the attachment form.
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, ContextPage, etc.)
//! - `source_switcher`: Camera/Library option controls
//! - `settings`: Settings drawer UI
//! - `view`: Main view rendering
//! - `update`: Message handling
//! - `handlers`: Message handlers by functional domain
//!
//! # Main Types
//!
//! - `AppModel`: Main application state
//! - `Message`: All possible user interactions and system events

mod handlers;
mod settings;
mod source_switcher;
mod state;
mod update;
mod view;

// Re-export public API
use crate::config::Config;
use crate::fl;
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
pub use state::{AppModel, CaptureProbe, ContextPage, Flags, Message};
use tracing::{error, info};

const REPOSITORY: &str = "https://github.com/cosmic-utils/image-input";
const APP_ICON: &[u8] = include_bytes!(
    "../../resources/icons/hicolor/scalable/apps/io.github.cosmic-utils.image-input.svg"
);

/// Default directory for the library picker (~/Pictures)
pub fn default_library_directory() -> Option<std::path::PathBuf> {
    dirs::picture_dir()
}

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = Flags;

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.cosmic-utils.image-input";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(crate::constants::app_info::version())
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let (config_handler, config) =
            match cosmic_config::Config::new(Self::APP_ID, Config::VERSION) {
                Ok(handler) => {
                    let config = match Config::get_entry(&handler) {
                        Ok(config) => config,
                        Err((errors, config)) => {
                            error!(?errors, "Errors loading config");
                            config
                        }
                    };
                    (Some(handler), config)
                }
                Err(err) => {
                    error!(%err, "Failed to create config handler");
                    (None, Config::default())
                }
            };

        // The controls' state at load time: the configured default unless
        // the command line overrides it
        let source = flags.source_override.unwrap_or(config.default_source);
        info!(%source, from_cli = flags.source_override.is_some(), "Initial source");

        let theme_dropdown_options = vec![
            fl!("theme-system"),
            fl!("theme-dark"),
            fl!("theme-light"),
        ];
        let source_dropdown_options = crate::input::ImageSource::ALL
            .iter()
            .map(|source| source.display_name().to_string())
            .collect();

        let app_theme = config.app_theme;

        // Construct the app model with the runtime's core.
        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            config,
            config_handler,
            source,
            image_input: crate::input::FileInput::new(),
            attached_image: None,
            attachment_preview: None,
            dialog_open: false,
            capture_probe: None,
            attach_error: None,
            theme_dropdown_options,
            source_dropdown_options,
        };

        // Run the derivation once eagerly so the attribute matches the
        // initial selection before any change event arrives
        app.sync_capture_hint();

        (app, cosmic::command::set_theme(app_theme.theme()))
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::Settings))
                .into(),
        ]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
            ContextPage::Settings => self.settings_view(),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        // Apply external config edits live
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config))
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}
