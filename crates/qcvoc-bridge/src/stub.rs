// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// Stub capabilities for desktop/CI builds where the native capture SDKs are
// unavailable. Every launch returns `PlatformUnavailable`; notices go to the
// log.

use std::path::Path;

use qcvoc_core::error::{Result, ShellError};
use qcvoc_core::notices::{Severity, UserNotice};

use crate::traits::{BarcodeCapability, CameraCapability, CaptureCapabilities, NoticeSink};

/// No-op capabilities returned on non-mobile platforms.
pub struct StubCapabilities;

impl CaptureCapabilities for StubCapabilities {
    fn platform_name(&self) -> &str {
        "desktop (stub)"
    }
}

impl BarcodeCapability for StubCapabilities {
    fn begin_scan(&self) -> Result<()> {
        tracing::warn!("BarcodeCapability::begin_scan called on stub capabilities");
        Err(ShellError::PlatformUnavailable)
    }
}

impl CameraCapability for StubCapabilities {
    fn permissions_granted(&self) -> bool {
        false
    }

    fn request_permissions(&self) -> Result<()> {
        tracing::warn!("CameraCapability::request_permissions called on stub capabilities");
        Err(ShellError::PlatformUnavailable)
    }

    fn begin_capture(&self, _target: &Path) -> Result<()> {
        tracing::warn!("CameraCapability::begin_capture called on stub capabilities");
        Err(ShellError::PlatformUnavailable)
    }
}

impl NoticeSink for StubCapabilities {
    fn show_notice(&self, notice: &UserNotice) {
        match notice.severity {
            Severity::Info => tracing::info!(message = %notice.message, "notice"),
            Severity::Warning => tracing::warn!(message = %notice.message, "notice"),
            Severity::Error => tracing::error!(message = %notice.message, "notice"),
        }
    }
}
