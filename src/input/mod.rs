// SPDX-License-Identifier: GPL-3.0-only

//! Image source selection and the file-input target element
//!
//! The selection between taking a new photo and picking one from the
//! library is mirrored onto the file input's optional capture attribute: a
//! pure derivation computes the attribute state and an apply step writes it
//! onto the element. The attribute in turn decides what activating the
//! input opens.

use serde::{Deserialize, Serialize};

use crate::constants::ACCEPTED_EXTENSIONS;

/// Where an attached image comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSource {
    /// Capture a new photo with a camera
    Camera,
    /// Pick an existing image from the library
    #[default]
    Library,
}

impl ImageSource {
    /// All sources for UI iteration
    pub const ALL: [ImageSource; 2] = [ImageSource::Camera, ImageSource::Library];

    /// Get display name for the source
    pub fn display_name(&self) -> &'static str {
        match self {
            ImageSource::Camera => "Camera",
            ImageSource::Library => "Library",
        }
    }
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Value of the file input's capture attribute
///
/// When present, the attribute hints the host platform to open a capture
/// device instead of a file picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureHint {
    /// Outward-facing capture device
    Environment,
}

impl CaptureHint {
    /// The literal attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureHint::Environment => "environment",
        }
    }
}

/// Derive the capture attribute state from the current selection.
///
/// The camera option selects the outward-facing capture hint; the library
/// option leaves the attribute absent. Free of side effects so the toggling
/// logic is testable without a running UI.
pub fn derive_capture_hint(source: ImageSource) -> Option<CaptureHint> {
    match source {
        ImageSource::Camera => Some(CaptureHint::Environment),
        ImageSource::Library => None,
    }
}

/// What the host platform opens when the input is activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerRoute {
    /// Open a capture device (capture attribute present)
    CaptureDevice,
    /// Open a file picker (capture attribute absent)
    FileBrowser,
}

/// The file-input target element
///
/// Holds the single optional capture attribute the selection drives. The
/// attribute is either absent or carries a concrete hint; clearing removes
/// it rather than leaving an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInput {
    capture: Option<CaptureHint>,
}

impl FileInput {
    /// Create an input with no capture attribute
    pub fn new() -> Self {
        Self { capture: None }
    }

    /// Current capture attribute, if set
    pub fn capture(&self) -> Option<CaptureHint> {
        self.capture
    }

    /// Apply a derived capture attribute state to the element
    pub fn apply_capture_hint(&mut self, hint: Option<CaptureHint>) {
        self.capture = hint;
    }

    /// Re-derive the capture attribute from the selection and apply it
    pub fn sync_to_source(&mut self, source: ImageSource) {
        self.apply_capture_hint(derive_capture_hint(source));
    }

    /// Route an activation based on the capture attribute
    pub fn route(&self) -> PickerRoute {
        match self.capture {
            Some(_) => PickerRoute::CaptureDevice,
            None => PickerRoute::FileBrowser,
        }
    }

    /// Check a file against the accept list (png/jpg/jpeg/gif)
    pub fn accepts(&self, path: &std::path::Path) -> bool {
        path.extension()
            .map(|ext| {
                let ext = ext.to_string_lossy();
                ACCEPTED_EXTENSIONS
                    .iter()
                    .any(|accepted| ext.eq_ignore_ascii_case(accepted))
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn camera_selection_derives_environment_hint() {
        assert_eq!(
            derive_capture_hint(ImageSource::Camera),
            Some(CaptureHint::Environment)
        );
        assert_eq!(CaptureHint::Environment.as_str(), "environment");
    }

    #[test]
    fn library_selection_derives_absent_attribute() {
        assert_eq!(derive_capture_hint(ImageSource::Library), None);
    }

    #[test]
    fn initial_sync_matches_default_selection() {
        // Camera checked at load
        let mut input = FileInput::new();
        input.sync_to_source(ImageSource::Camera);
        assert_eq!(input.capture(), Some(CaptureHint::Environment));

        // Library checked at load
        let mut input = FileInput::new();
        input.sync_to_source(ImageSource::Library);
        assert_eq!(input.capture(), None);
    }

    #[test]
    fn switching_to_camera_sets_attribute() {
        let mut input = FileInput::new();
        input.sync_to_source(ImageSource::Library);
        input.sync_to_source(ImageSource::Camera);
        assert_eq!(input.capture(), Some(CaptureHint::Environment));
    }

    #[test]
    fn switching_to_library_removes_attribute() {
        let mut input = FileInput::new();
        input.sync_to_source(ImageSource::Camera);
        input.sync_to_source(ImageSource::Library);
        assert_eq!(input.capture(), None);
    }

    #[test]
    fn repeated_changes_never_drift() {
        let mut input = FileInput::new();
        let sequence = [
            ImageSource::Camera,
            ImageSource::Library,
            ImageSource::Camera,
            ImageSource::Camera,
            ImageSource::Library,
            ImageSource::Library,
        ];
        for source in sequence {
            input.sync_to_source(source);
            assert_eq!(input.capture(), derive_capture_hint(source));
        }
    }

    #[test]
    fn route_follows_the_attribute() {
        let mut input = FileInput::new();
        assert_eq!(input.route(), PickerRoute::FileBrowser);
        input.apply_capture_hint(Some(CaptureHint::Environment));
        assert_eq!(input.route(), PickerRoute::CaptureDevice);
        input.apply_capture_hint(None);
        assert_eq!(input.route(), PickerRoute::FileBrowser);
    }

    #[test]
    fn accept_list_matches_allowed_extensions() {
        let input = FileInput::new();
        assert!(input.accepts(Path::new("cover.png")));
        assert!(input.accepts(Path::new("cover.JPG")));
        assert!(input.accepts(Path::new("cover.jpeg")));
        assert!(input.accepts(Path::new("cover.gif")));
        assert!(!input.accepts(Path::new("cover.webp")));
        assert!(!input.accepts(Path::new("cover")));
    }
}
