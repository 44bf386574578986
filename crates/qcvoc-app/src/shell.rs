// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// The WebView shell.
//
// Owns the window and the WebView, wires navigation interception into the
// bridge (trust check, command parse, capture dispatch), evaluates callback
// invocations in the page, and feeds volume-key releases into the hidden
// environment gesture. Everything runs on the UI thread; capability
// completions re-enter through the event-loop proxy.

use std::cell::RefCell;
use std::rc::Rc;

use tao::dpi::LogicalSize;
use tao::event::{ElementState, Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tao::keyboard::KeyCode;
use tao::window::WindowBuilder;
use tracing::{debug, info, warn};
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use qcvoc_bridge::traits::{CaptureCapabilities, CaptureEvent};
use qcvoc_bridge::{
    BridgeCommand, CaptureBridge, CaptureRequest, EnvironmentToggle, GestureKey, NavigationRoute,
    ParsedCommand, TrustChecker, route,
};
use qcvoc_core::ShellConfig;
use qcvoc_core::error::{Result, ShellError};
use qcvoc_core::notices;
use qcvoc_core::types::Environment;
use qcvoc_media::PhotoPipeline;

use crate::services::photo_store::TempPhotoStorage;

/// Events posted back into the UI event loop.
#[derive(Debug)]
enum ShellEvent {
    /// A bridge command intercepted by the navigation handler.
    Command(ParsedCommand),
    /// A capture completion delivered by the platform layer.
    Capture(CaptureEvent),
    /// Page load progress, driving the title indicator.
    Loading { finished: bool },
}

/// Build the shell and run its event loop. Does not return.
pub fn run(config: ShellConfig) -> Result<()> {
    let event_loop = EventLoopBuilder::<ShellEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&config.window_title)
        .with_inner_size(LogicalSize::new(config.window_width, config.window_height))
        .build(&event_loop)
        .map_err(|err| ShellError::WebView(err.to_string()))?;

    let trust = TrustChecker::from_config(&config)?;

    // The committed page URL, shared between the navigation handler (which
    // reads it as the issuing page) and the page-load handler (which writes
    // it). Both run on the UI thread.
    let current_url: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

    let nav_trust = trust.clone();
    let nav_current = Rc::clone(&current_url);
    let nav_proxy = proxy.clone();

    let load_current = Rc::clone(&current_url);
    let load_proxy = proxy.clone();

    let webview = WebViewBuilder::new()
        .with_url(config.content_url(Environment::Production))
        .with_navigation_handler(move |target_url| {
            match route(&nav_trust, nav_current.borrow().as_deref(), &target_url) {
                NavigationRoute::Command(parsed) => {
                    let _ = nav_proxy.send_event(ShellEvent::Command(parsed));
                    false
                }
                NavigationRoute::Allow => true,
                NavigationRoute::Block => {
                    info!(url = %target_url, "blocked navigation to untrusted origin");
                    false
                }
            }
        })
        .with_on_page_load_handler(move |event, url| match event {
            PageLoadEvent::Started => {
                *load_current.borrow_mut() = Some(url);
                let _ = load_proxy.send_event(ShellEvent::Loading { finished: false });
            }
            PageLoadEvent::Finished => {
                let _ = load_proxy.send_event(ShellEvent::Loading { finished: true });
            }
        })
        .build(&window)
        .map_err(|err| ShellError::WebView(err.to_string()))?;

    let event_proxy = proxy.clone();
    let capabilities = qcvoc_bridge::platform_capabilities(Box::new(move |event| {
        let _ = event_proxy.send_event(ShellEvent::Capture(event));
    }));
    info!(platform = capabilities.platform_name(), "capabilities initialised");

    let pipeline = PhotoPipeline::new(config.photo_edge, config.jpeg_quality);
    let mut bridge = CaptureBridge::new(Box::new(TempPhotoStorage::new()), pipeline);
    let mut toggle = EnvironmentToggle::new();

    info!(url = config.content_url(toggle.environment()), "loading content");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event: WindowEvent::CloseRequested, .. } => {
                info!("window closed; shutting down");
                *control_flow = ControlFlow::Exit;
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event: key_event, .. },
                ..
            } => {
                if key_event.state != ElementState::Released {
                    return;
                }
                let key = match key_event.physical_key {
                    KeyCode::AudioVolumeUp => GestureKey::VolumeUp,
                    KeyCode::AudioVolumeDown => GestureKey::VolumeDown,
                    _ => return,
                };
                if let Some(environment) = toggle.input(key) {
                    let url = config.content_url(environment).to_owned();
                    info!(%environment, %url, "environment switched");
                    capabilities.show_notice(&notices::environment_switched(&url));
                    if let Err(err) = webview.load_url(&url) {
                        warn!(error = %err, "environment reload failed");
                    }
                }
            }
            Event::UserEvent(ShellEvent::Command(parsed)) => {
                start_capture(&mut bridge, capabilities.as_ref(), parsed);
            }
            Event::UserEvent(ShellEvent::Capture(capture_event)) => {
                apply_capture_event(&mut bridge, capabilities.as_ref(), &webview, capture_event);
            }
            Event::UserEvent(ShellEvent::Loading { finished }) => {
                if finished {
                    window.set_title(&config.window_title);
                } else {
                    window.set_title(&format!("{} (loading...)", config.window_title));
                }
            }
            _ => {}
        }
    });
}

/// Arm the bridge for an intercepted command and launch the capability.
fn start_capture(
    bridge: &mut CaptureBridge,
    capabilities: &dyn CaptureCapabilities,
    parsed: ParsedCommand,
) {
    if !bridge.is_idle() {
        warn!(command = ?parsed.command, "capture request ignored; another flow is active");
        return;
    }

    let request = match parsed.command {
        BridgeCommand::Scan => bridge.start_scan(parsed.callback),
        BridgeCommand::AcquirePhoto => {
            bridge.start_photo(parsed.callback, capabilities.permissions_granted())
        }
    };

    match request {
        Ok(request) => dispatch_request(bridge, capabilities, request),
        Err(err) => {
            warn!(error = %err, "capture flow could not start");
            capabilities.show_notice(&notices::notice_for(&err));
        }
    }
}

/// Hand a bridge request to the platform; on launch failure the flow is
/// abandoned and the user notified.
fn dispatch_request(
    bridge: &mut CaptureBridge,
    capabilities: &dyn CaptureCapabilities,
    request: CaptureRequest,
) {
    let launched = match &request {
        CaptureRequest::LaunchScanner => capabilities.begin_scan(),
        CaptureRequest::RequestPermission => capabilities.request_permissions(),
        CaptureRequest::LaunchCamera { target } => capabilities.begin_capture(target),
    };

    if let Err(err) = launched {
        warn!(error = %err, ?request, "capability launch failed");
        bridge.abort();
        capabilities.show_notice(&notices::notice_for(&err));
    }
}

/// Feed a platform completion into the bridge and deliver whatever it
/// produced into the page.
fn apply_capture_event(
    bridge: &mut CaptureBridge,
    capabilities: &dyn CaptureCapabilities,
    webview: &WebView,
    event: CaptureEvent,
) {
    match event {
        CaptureEvent::ScanFinished(outcome) => {
            if let Some(invocation) = bridge.complete_scan(outcome) {
                evaluate(webview, invocation.as_str());
            }
        }
        CaptureEvent::PermissionsResolved { granted } => {
            if !granted {
                capabilities.show_notice(&notices::permission_denied());
            }
            match bridge.permission_result(granted) {
                Ok(Some(request)) => dispatch_request(bridge, capabilities, request),
                Ok(None) => {}
                Err(err) => {
                    warn!(error = %err, "photo flow aborted");
                    capabilities.show_notice(&notices::notice_for(&err));
                }
            }
        }
        CaptureEvent::PhotoFinished { captured } => match bridge.complete_photo(captured) {
            Ok(Some(delivery)) => {
                if delivery.degraded {
                    capabilities.show_notice(&notices::photo_retrieval_failed());
                }
                evaluate(webview, delivery.invocation.as_str());
            }
            Ok(None) => {}
            Err(err) => {
                warn!(error = %err, "photo delivery failed");
                capabilities.show_notice(&notices::notice_for(&err));
            }
        },
    }
}

fn evaluate(webview: &WebView, js: &str) {
    debug!(%js, "delivering callback invocation");
    if let Err(err) = webview.evaluate_script(js) {
        warn!(error = %err, "callback delivery failed");
    }
}
