// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// qcvoc-bridge — The mechanism by which hosted web content requests
// native-only capabilities and receives results back as callback invocations.
//
// The hosted page signals a command by navigating to a URL whose query string
// carries a command and a callback identifier. The shell intercepts the
// navigation, routes it through the trust check and the command parser, and
// drives the capture state machine; results come back as JavaScript
// invocations evaluated in the page.

pub mod callback;
pub mod capture;
pub mod command;
pub mod gesture;
pub mod route;
pub mod stub;
pub mod traits;
pub mod trust;

pub use callback::{CallbackId, JsInvocation};
pub use capture::{CaptureBridge, CaptureRequest, PhotoDelivery};
pub use command::{BridgeCommand, ParsedCommand, parse_query};
pub use gesture::{EnvironmentToggle, GestureKey};
pub use route::{NavigationRoute, route};
pub use traits::{CaptureCapabilities, CaptureEvent, CaptureEventSink, ScanOutcome};
pub use trust::TrustChecker;

/// Retrieve the capability implementation for the target platform.
///
/// Desktop and CI builds get the stub, which fails every launch with
/// `PlatformUnavailable`. Mobile backends plug in here behind `target_os`
/// gates and deliver their completion events through `events`.
pub fn platform_capabilities(
    events: traits::CaptureEventSink,
) -> Box<dyn traits::CaptureCapabilities> {
    // The desktop stub fails every launch synchronously, so there is never a
    // completion to deliver.
    let _ = events;
    Box::new(stub::StubCapabilities)
}
