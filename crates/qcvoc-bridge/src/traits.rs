// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// Platform-agnostic trait definitions for the native capture capabilities.
//
// Barcode and photo capture are asynchronous request/completion pairs: the
// shell launches a capability through these traits, and the platform layer
// delivers a `CaptureEvent` back through the event sink when the flow
// finishes. The bridge never polls and never blocks.

use std::path::{Path, PathBuf};

use qcvoc_core::error::Result;
use qcvoc_core::notices::UserNotice;

/// Unified surface that groups the native capabilities the hosted page can
/// request, plus user-notice display.
pub trait CaptureCapabilities: BarcodeCapability + CameraCapability + NoticeSink {
    /// Human-readable platform name (e.g. "Android 14").
    fn platform_name(&self) -> &str;
}

/// Launch the barcode capture UI.
pub trait BarcodeCapability {
    /// Start a scan. Completion arrives later as
    /// `CaptureEvent::ScanFinished`.
    fn begin_scan(&self) -> Result<()>;
}

/// Drive the system camera.
pub trait CameraCapability {
    /// Whether camera and storage permissions are already granted.
    fn permissions_granted(&self) -> bool;

    /// Ask the OS for camera/storage permission. The user's answer arrives
    /// as `CaptureEvent::PermissionsResolved`.
    fn request_permissions(&self) -> Result<()>;

    /// Launch the camera, writing the captured image to `target`.
    /// Completion arrives as `CaptureEvent::PhotoFinished`.
    fn begin_capture(&self, target: &Path) -> Result<()>;
}

/// Display a transient user notice (toast/snackbar on mobile).
pub trait NoticeSink {
    fn show_notice(&self, notice: &UserNotice);
}

/// Allocates the camera target file for a photo flow.
pub trait PhotoStorage {
    fn allocate(&self) -> Result<PathBuf>;
}

/// How platform backends deliver completion events back to the shell's
/// event loop.
pub type CaptureEventSink = Box<dyn Fn(CaptureEvent)>;

/// Completion events for in-flight capture flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    ScanFinished(ScanOutcome),
    PermissionsResolved { granted: bool },
    /// `captured` is false when the user backed out of the camera.
    PhotoFinished { captured: bool },
}

/// How a barcode scan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The capability decoded a barcode.
    Decoded(String),
    /// The user cancelled or the capability produced no result.
    Cancelled,
}
