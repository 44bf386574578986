// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// Unified error types for the QCVOC shell.

use thiserror::Error;

/// Top-level error type for all shell operations.
#[derive(Debug, Error)]
pub enum ShellError {
    // -- Bridge errors --
    #[error("a capture flow is already in progress")]
    CaptureBusy,

    #[error("invalid origin configuration: {0}")]
    Config(String),

    // -- Capture errors --
    #[error("temporary photo storage failed: {0}")]
    PhotoStorage(String),

    #[error("image processing failed: {0}")]
    Image(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    // -- Platform --
    #[error("capability not available on this platform")]
    PlatformUnavailable,

    #[error("webview error: {0}")]
    WebView(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ShellError>;
