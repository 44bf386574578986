// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// User-visible notices for capture and bridge failures.
//
// Kiosk users are volunteers, not developers. Every surfaced failure maps to
// a short plain-language message; nothing technical leaks to the screen.

use crate::error::ShellError;

/// How prominently a notice should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational, e.g. an environment switch.
    Info,
    /// The user must do something (grant a permission, retry).
    Warning,
    /// An operation failed; the shell recovered but the result is degraded.
    Error,
}

/// A short user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserNotice {
    pub message: String,
    pub severity: Severity,
}

impl UserNotice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Info }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Warning }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Error }
    }
}

/// Notice shown when the user refuses camera/storage permission.
pub fn permission_denied() -> UserNotice {
    UserNotice::warning("Required permissions were not granted for photo taking")
}

/// Notice shown when a captured photo cannot be read back. The page still
/// receives a blank placeholder in this case.
pub fn photo_retrieval_failed() -> UserNotice {
    UserNotice::error("Error retrieving photo")
}

/// Notice shown after the hidden gesture switches environments.
pub fn environment_switched(url: &str) -> UserNotice {
    UserNotice::info(format!("Environment switched to {url}"))
}

/// Map an error to the notice the user should see.
pub fn notice_for(err: &ShellError) -> UserNotice {
    match err {
        ShellError::PhotoStorage(_) | ShellError::Io(_) => {
            UserNotice::error("Error creating temporary file to store photo")
        }
        ShellError::Image(_) => photo_retrieval_failed(),
        ShellError::PlatformUnavailable => {
            UserNotice::warning("This feature is not available on this device")
        }
        ShellError::CaptureBusy => {
            UserNotice::warning("Another capture is already in progress")
        }
        ShellError::Config(_) | ShellError::WebView(_) => {
            UserNotice::error("Something went wrong. Please restart the app")
        }
    }
}
