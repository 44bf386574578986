// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// Capture state machine.
//
// At most one flow is active at a time:
//   scan:  Idle -> AwaitingScan -> Idle
//   photo: Idle -> AwaitingPermission -> AwaitingCapture -> Idle
//
// Each `start_*` records the page callback and tells the shell what to ask
// the platform for; each completion consumes the recorded state and, where
// the flow produced a result, yields the JavaScript invocation that delivers
// it. Completions that arrive in the wrong state are logged and ignored so a
// stale platform event can never be misapplied to a later flow.

use std::mem;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use qcvoc_core::error::{Result, ShellError};
use qcvoc_media::PhotoPipeline;

use crate::callback::{CallbackId, JsInvocation};
use crate::traits::{PhotoStorage, ScanOutcome};

/// What the shell must ask the platform to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureRequest {
    LaunchScanner,
    RequestPermission,
    LaunchCamera { target: PathBuf },
}

#[derive(Debug)]
enum CaptureState {
    Idle,
    AwaitingScan { callback: CallbackId },
    AwaitingPermission { callback: CallbackId },
    AwaitingCapture { callback: CallbackId, target: PathBuf },
}

/// Result of a successfully completed photo flow.
#[derive(Debug)]
pub struct PhotoDelivery {
    pub invocation: JsInvocation,
    /// True when the blank placeholder was substituted; the user should be
    /// told the photo could not be retrieved.
    pub degraded: bool,
}

/// Dispatches parsed commands to the native capabilities and formats the
/// callback invocation once a flow completes.
pub struct CaptureBridge {
    state: CaptureState,
    storage: Box<dyn PhotoStorage>,
    pipeline: PhotoPipeline,
}

impl CaptureBridge {
    pub fn new(storage: Box<dyn PhotoStorage>, pipeline: PhotoPipeline) -> Self {
        Self { state: CaptureState::Idle, storage, pipeline }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, CaptureState::Idle)
    }

    /// Abandon the active flow, if any, without invoking its callback.
    /// Used when a capability launch fails after the flow was armed.
    pub fn abort(&mut self) {
        if let CaptureState::AwaitingCapture { target, .. } = &self.state {
            let _ = std::fs::remove_file(target);
        }
        self.state = CaptureState::Idle;
    }

    // -- Scan flow ------------------------------------------------------------

    /// Arm a scan flow for `callback`.
    pub fn start_scan(&mut self, callback: CallbackId) -> Result<CaptureRequest> {
        self.ensure_idle()?;
        info!(callback = %callback, "starting barcode scan");
        self.state = CaptureState::AwaitingScan { callback };
        Ok(CaptureRequest::LaunchScanner)
    }

    /// Finish the scan flow. A decoded value is delivered as a quoted
    /// string; cancellation is delivered as `null` so the page can stop
    /// waiting.
    pub fn complete_scan(&mut self, outcome: ScanOutcome) -> Option<JsInvocation> {
        match mem::replace(&mut self.state, CaptureState::Idle) {
            CaptureState::AwaitingScan { callback } => match outcome {
                ScanOutcome::Decoded(value) => {
                    info!(callback = %callback, "barcode decoded");
                    Some(JsInvocation::with_text(&callback, &value))
                }
                ScanOutcome::Cancelled => {
                    info!(callback = %callback, "barcode scan cancelled");
                    Some(JsInvocation::cancelled(&callback))
                }
            },
            other => {
                warn!("scan completion arrived with no scan in progress");
                self.state = other;
                None
            }
        }
    }

    // -- Photo flow -----------------------------------------------------------

    /// Arm a photo flow for `callback`. If permissions are already granted
    /// the flow proceeds straight to camera launch; otherwise it waits for
    /// the permission result.
    pub fn start_photo(
        &mut self,
        callback: CallbackId,
        permissions_granted: bool,
    ) -> Result<CaptureRequest> {
        self.ensure_idle()?;
        info!(callback = %callback, permissions_granted, "starting photo capture");
        if permissions_granted {
            self.proceed_to_capture(callback)
        } else {
            self.state = CaptureState::AwaitingPermission { callback };
            Ok(CaptureRequest::RequestPermission)
        }
    }

    /// Apply the OS permission answer. On grant the flow proceeds to camera
    /// launch; on denial it aborts to Idle and the callback is never
    /// invoked.
    pub fn permission_result(&mut self, granted: bool) -> Result<Option<CaptureRequest>> {
        match mem::replace(&mut self.state, CaptureState::Idle) {
            CaptureState::AwaitingPermission { callback } => {
                if granted {
                    self.proceed_to_capture(callback).map(Some)
                } else {
                    info!("camera permission denied; photo flow aborted");
                    Ok(None)
                }
            }
            other => {
                warn!("permission result arrived with no photo flow awaiting it");
                self.state = other;
                Ok(None)
            }
        }
    }

    /// Finish the photo flow. On capture the image is transformed and
    /// delivered; an unreadable capture still delivers (a blank placeholder,
    /// flagged degraded). Cancellation reaches Idle without delivering.
    pub fn complete_photo(&mut self, captured: bool) -> Result<Option<PhotoDelivery>> {
        match mem::replace(&mut self.state, CaptureState::Idle) {
            CaptureState::AwaitingCapture { callback, target } => {
                if !captured {
                    info!("photo capture cancelled");
                    let _ = std::fs::remove_file(&target);
                    return Ok(None);
                }
                let artifact = self.pipeline.process_file(&target);
                let _ = std::fs::remove_file(&target);
                let artifact = artifact?;
                info!(bytes = artifact.data_url.len(), "photo ready for delivery");
                Ok(Some(PhotoDelivery {
                    invocation: JsInvocation::with_text(&callback, &artifact.data_url),
                    degraded: artifact.degraded,
                }))
            }
            other => {
                warn!("photo completion arrived with no capture awaiting it");
                self.state = other;
                Ok(None)
            }
        }
    }

    fn proceed_to_capture(&mut self, callback: CallbackId) -> Result<CaptureRequest> {
        let target = match self.storage.allocate() {
            Ok(target) => target,
            Err(err) => {
                // Flow aborts before the camera ever launches.
                self.state = CaptureState::Idle;
                return Err(err);
            }
        };
        debug!(target = %target.display(), "camera target allocated");
        self.state = CaptureState::AwaitingCapture { callback, target: target.clone() };
        Ok(CaptureRequest::LaunchCamera { target })
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.is_idle() {
            Ok(())
        } else {
            Err(ShellError::CaptureBusy)
        }
    }
}
