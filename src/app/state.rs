// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use std::path::PathBuf;

use cosmic::cosmic_config;
use cosmic::widget::about::About;

use crate::config::Config;
use crate::errors::AppError;
use crate::input::{FileInput, ImageSource};

/// Startup data passed from the command line
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides the configured default selection for this run
    pub source_override: Option<ImageSource>,
}

/// Outcome of asking the host for a capture device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureProbe {
    /// Query in flight
    Checking,
    /// Host reported a capture device
    Present,
    /// Host reported no capture device
    Absent,
    /// Query failed
    Failed(AppError),
}

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// The about page for this app.
    pub about: About,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,
    /// Currently selected image source (the two option controls)
    pub source: ImageSource,
    /// The file-input target element the selection drives
    pub image_input: FileInput,
    /// Image currently attached through the input
    pub attached_image: Option<PathBuf>,
    /// Preview of the attached image
    pub attachment_preview: Option<cosmic::widget::image::Handle>,
    /// Whether a file dialog is currently open
    pub dialog_open: bool,
    /// Latest capture device probe outcome
    pub capture_probe: Option<CaptureProbe>,
    /// Error from the last attach attempt, shown in the form
    pub attach_error: Option<AppError>,
    /// Dropdown options (cached for UI)
    pub theme_dropdown_options: Vec<String>,
    pub source_dropdown_options: Vec<String>,
}

/// The context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
    Settings,
}

/// Messages emitted by the application and its widgets.
///
/// Messages are organized into logical groups:
/// - **UI Navigation**: Context pages and external URLs
/// - **Source Selection**: The Camera/Library option controls
/// - **Input Element**: Activation, dialog results, attachment actions
/// - **Settings**: Configuration, theme, default source
#[derive(Debug, Clone)]
pub enum Message {
    // ===== UI Navigation =====
    /// Open external URL (repository, etc.)
    LaunchUrl(String),
    /// Toggle context drawer page (About, Settings)
    ToggleContextPage(ContextPage),

    // ===== Source Selection =====
    /// Switch between the Camera and Library options
    SetSource(ImageSource),

    // ===== Input Element =====
    /// Activate the file input (routes on the capture attribute)
    ActivateInput,
    /// File dialog closed, possibly with a picked image
    ImagePicked(Option<PathBuf>),
    /// Attachment preview loaded from disk
    PreviewLoaded(Option<cosmic::widget::image::Handle>),
    /// Host answered the capture device probe
    CaptureDeviceChecked(Result<bool, AppError>),
    /// Detach the current image
    RemoveImage,
    /// Show the attached image in the file manager
    RevealImage,

    // ===== Settings =====
    /// Configuration updated externally
    UpdateConfig(Config),
    /// Select application theme by dropdown index
    SetAppTheme(usize),
    /// Select the startup image source by dropdown index
    SetDefaultSource(usize),
}
