// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// File extensions the image input accepts
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// UI sizing constants
pub mod ui {
    /// Minimum window width
    pub const MIN_WINDOW_WIDTH: f32 = 360.0;
    /// Minimum window height
    pub const MIN_WINDOW_HEIGHT: f32 = 320.0;
    /// Attachment preview edge length
    pub const PREVIEW_SIZE: f32 = 160.0;
}

/// Application metadata
pub mod app_info {
    /// Application version from Cargo.toml
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Check if running inside a Flatpak sandbox
    pub fn is_flatpak() -> bool {
        std::path::Path::new("/.flatpak-info").exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_list_covers_original_upload_types() {
        for ext in ["png", "jpg", "jpeg", "gif"] {
            assert!(ACCEPTED_EXTENSIONS.contains(&ext));
        }
        assert!(!ACCEPTED_EXTENSIONS.contains(&"webp"));
    }
}
