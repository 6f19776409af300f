// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! This module handles all application messages by routing them to focused
//! handler methods. The main `update()` function acts as a dispatcher, while
//! specific handlers are implemented in the `handlers` submodules organized
//! by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::source`: Source selection and capture attribute derivation
//! - `handlers::input`: Input activation, dialog results, attachment actions
//! - `handlers::ui`: Context pages, URL launch, settings

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    ///
    /// This dispatcher pattern keeps the main update function clean and makes
    /// it easy to find the handling code for any message type.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== UI Navigation =====
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),

            // ===== Source Selection =====
            Message::SetSource(source) => self.handle_set_source(source),

            // ===== Input Element =====
            Message::ActivateInput => self.handle_activate_input(),
            Message::ImagePicked(path) => self.handle_image_picked(path),
            Message::PreviewLoaded(handle) => self.handle_preview_loaded(handle),
            Message::CaptureDeviceChecked(result) => self.handle_capture_device_checked(result),
            Message::RemoveImage => self.handle_remove_image(),
            Message::RevealImage => self.handle_reveal_image(),

            // ===== Settings =====
            Message::UpdateConfig(config) => self.handle_update_config(config),
            Message::SetAppTheme(index) => self.handle_set_app_theme(index),
            Message::SetDefaultSource(index) => self.handle_set_default_source(index),
        }
    }
}
