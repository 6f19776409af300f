// SPDX-License-Identifier: GPL-3.0-only

//! Source selection handlers
//!
//! Keeps the file input's capture attribute consistent with the selected
//! image source.

use crate::app::state::{AppModel, Message};
use crate::input::{ImageSource, derive_capture_hint};
use cosmic::Task;
use tracing::{debug, info};

impl AppModel {
    pub(crate) fn handle_set_source(
        &mut self,
        source: ImageSource,
    ) -> Task<cosmic::Action<Message>> {
        // Option controls only emit a change when the checked state flips
        if self.source == source {
            debug!(%source, "Source unchanged");
            return Task::none();
        }

        self.source = source;
        self.capture_probe = None;
        self.sync_capture_hint();
        Task::none()
    }

    /// Re-derive the capture attribute from the selection and write it onto
    /// the input element
    pub(crate) fn sync_capture_hint(&mut self) {
        let hint = derive_capture_hint(self.source);
        self.image_input.apply_capture_hint(hint);
        info!(
            source = %self.source,
            capture = hint.map(|h| h.as_str()).unwrap_or("absent"),
            "Capture attribute synced"
        );
    }
}
