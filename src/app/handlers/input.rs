// SPDX-License-Identifier: GPL-3.0-only

//! Input element handlers
//!
//! Activation routes on the capture attribute: a set attribute hands the
//! request to the host's camera portal, an absent one opens the library
//! file dialog.

use std::path::PathBuf;

use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{error, info, warn};

use crate::app::state::{AppModel, CaptureProbe, Message};
use crate::errors::AppError;
use crate::fl;
use crate::input::PickerRoute;

impl AppModel {
    pub(crate) fn handle_activate_input(&mut self) -> Task<cosmic::Action<Message>> {
        match self.image_input.route() {
            PickerRoute::CaptureDevice => {
                info!("Input activated with capture hint - querying host portal");
                self.capture_probe = Some(CaptureProbe::Checking);
                Task::perform(crate::portal::capture_device_present(), |result| {
                    cosmic::Action::App(Message::CaptureDeviceChecked(result))
                })
            }
            PickerRoute::FileBrowser => {
                if self.dialog_open {
                    return Task::none();
                }
                self.dialog_open = true;

                let start_dir = self
                    .config
                    .last_library_dir
                    .clone()
                    .or_else(crate::app::default_library_directory);

                info!(
                    start_dir = ?start_dir,
                    "Input activated without capture hint - opening file dialog"
                );

                Task::perform(
                    async move {
                        let mut dialog = rfd::AsyncFileDialog::new()
                            .set_title(fl!("choose-image"))
                            .add_filter(fl!("image-files"), crate::constants::ACCEPTED_EXTENSIONS);
                        if let Some(dir) = start_dir {
                            dialog = dialog.set_directory(dir);
                        }
                        dialog
                            .pick_file()
                            .await
                            .map(|file| file.path().to_path_buf())
                    },
                    |path| cosmic::Action::App(Message::ImagePicked(path)),
                )
            }
        }
    }

    pub(crate) fn handle_image_picked(
        &mut self,
        path: Option<PathBuf>,
    ) -> Task<cosmic::Action<Message>> {
        self.dialog_open = false;

        let Some(path) = path else {
            info!("File dialog dismissed");
            return Task::none();
        };

        if !self.image_input.accepts(&path) {
            warn!(path = %path.display(), "Rejected file outside the accept list");
            self.attach_error = Some(AppError::UnsupportedFile(
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
            ));
            return Task::none();
        }

        info!(path = %path.display(), "Image attached");
        self.attach_error = None;
        self.attachment_preview = None;

        // Remember the directory for the next library visit
        if let Some(parent) = path.parent() {
            self.config.last_library_dir = Some(parent.to_path_buf());
            if let Some(handler) = self.config_handler.as_ref()
                && let Err(err) = self.config.write_entry(handler)
            {
                error!(?err, "Failed to save library directory");
            }
        }

        self.attached_image = Some(path.clone());

        // Load the preview off the UI thread
        Task::perform(
            async move {
                tokio::fs::read(&path)
                    .await
                    .ok()
                    .map(cosmic::widget::image::Handle::from_bytes)
            },
            |handle| cosmic::Action::App(Message::PreviewLoaded(handle)),
        )
    }

    pub(crate) fn handle_preview_loaded(
        &mut self,
        handle: Option<cosmic::widget::image::Handle>,
    ) -> Task<cosmic::Action<Message>> {
        if handle.is_none() {
            warn!("Attachment preview could not be read");
        }
        self.attachment_preview = handle;
        Task::none()
    }

    pub(crate) fn handle_capture_device_checked(
        &mut self,
        result: Result<bool, AppError>,
    ) -> Task<cosmic::Action<Message>> {
        self.capture_probe = Some(match result {
            Ok(true) => {
                info!("Host reports a capture device present");
                CaptureProbe::Present
            }
            Ok(false) => {
                warn!("Host reports no capture device");
                CaptureProbe::Absent
            }
            Err(err) => {
                error!(error = %err, "Capture device probe failed");
                CaptureProbe::Failed(err)
            }
        });
        Task::none()
    }

    pub(crate) fn handle_remove_image(&mut self) -> Task<cosmic::Action<Message>> {
        self.attached_image = None;
        self.attachment_preview = None;
        self.attach_error = None;
        Task::none()
    }

    pub(crate) fn handle_reveal_image(&self) -> Task<cosmic::Action<Message>> {
        if let Some(ref path) = self.attached_image {
            info!(path = %path.display(), "Revealing attached image");
            if let Err(e) = open::that(path) {
                error!(error = %e, path = %path.display(), "Failed to open attached image");
            }
        }
        Task::none()
    }
}
