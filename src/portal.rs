// SPDX-License-Identifier: GPL-3.0-only

//! XDG desktop portal integration for capture device hints
//!
//! When the file input carries a capture hint, activating it is handed to
//! the host platform rather than a file picker. The desktop's boundary for
//! that is the camera portal on the session bus; this module asks it
//! whether a capture device is present.

use tracing::{error, info};

use crate::errors::{AppResult, PortalError};

const PORTAL_DESTINATION: &str = "org.freedesktop.portal.Desktop";
const PORTAL_PATH: &str = "/org/freedesktop/portal/desktop";
const CAMERA_INTERFACE: &str = "org.freedesktop.portal.Camera";

/// Ask the host whether a capture device is present.
///
/// Works in both native and flatpak environments; the portal mediates
/// device visibility either way.
pub async fn capture_device_present() -> AppResult<bool> {
    let connection = zbus::Connection::session()
        .await
        .map_err(|e| PortalError::BusUnavailable(e.to_string()))?;

    let camera_proxy = zbus::Proxy::new(
        &connection,
        PORTAL_DESTINATION,
        PORTAL_PATH,
        CAMERA_INTERFACE,
    )
    .await
    .map_err(|e| PortalError::QueryFailed(e.to_string()))?;

    let present: bool = camera_proxy
        .get_property("IsCameraPresent")
        .await
        .map_err(|e| {
            error!(error = %e, "Camera portal property query failed");
            PortalError::QueryFailed(e.to_string())
        })?;

    info!(present, "Camera portal queried");
    Ok(present)
}
