// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// Navigation routing — the intercept decision for every navigation the
// WebView attempts.
//
// Ordering matters: the trust of the *issuing* page is checked before the
// target is even parsed, so an untrusted page can never reach the command
// parser.

use tracing::debug;
use url::Url;

use crate::command::{ParsedCommand, parse_query};
use crate::trust::TrustChecker;

/// What the shell should do with an intercepted navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRoute {
    /// A bridge command: block the navigation and start the capture flow.
    Command(ParsedCommand),
    /// A trusted target: load it in-app.
    Allow,
    /// Untrusted current page or untrusted target: refuse to load.
    Block,
}

/// Decide the route for a navigation from `current_url` to `target_url`.
///
/// `current_url` is `None` until the first page has committed; in that
/// window the only legitimate navigation is the shell's own initial load, so
/// commands are not honored and the target's trust alone decides.
pub fn route(trust: &TrustChecker, current_url: Option<&str>, target_url: &str) -> NavigationRoute {
    match current_url {
        None => {
            return if trust.is_trusted(target_url) {
                NavigationRoute::Allow
            } else {
                NavigationRoute::Block
            };
        }
        Some(current) if !trust.is_trusted(current) => return NavigationRoute::Block,
        Some(_) => {}
    }

    let query = Url::parse(target_url)
        .ok()
        .and_then(|u| u.query().map(str::to_owned));
    if let Some(parsed) = parse_query(query.as_deref()) {
        debug!(command = ?parsed.command, callback = %parsed.callback, "bridge command intercepted");
        return NavigationRoute::Command(parsed);
    }

    if trust.is_trusted(target_url) {
        NavigationRoute::Allow
    } else {
        NavigationRoute::Block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::BridgeCommand;
    use qcvoc_core::config::{DEVELOPMENT_URL, PRODUCTION_URL};
    use qcvoc_core::ShellConfig;

    fn trust() -> TrustChecker {
        TrustChecker::from_config(&ShellConfig::default()).unwrap()
    }

    fn command_url() -> String {
        format!("{PRODUCTION_URL}/bridge?command=scan&callback=onScan")
    }

    #[test]
    fn initial_load_of_trusted_origin_is_allowed() {
        assert_eq!(route(&trust(), None, PRODUCTION_URL), NavigationRoute::Allow);
    }

    #[test]
    fn initial_load_never_honors_commands() {
        // Still a trusted target, so it loads, but no capture flow starts.
        assert_eq!(route(&trust(), None, &command_url()), NavigationRoute::Allow);
    }

    #[test]
    fn trusted_page_issuing_command_is_routed_to_bridge() {
        let routed = route(&trust(), Some(PRODUCTION_URL), &command_url());
        match routed {
            NavigationRoute::Command(parsed) => {
                assert_eq!(parsed.command, BridgeCommand::Scan);
                assert_eq!(parsed.callback.as_str(), "onScan");
            }
            other => panic!("expected command route, got {other:?}"),
        }
    }

    #[test]
    fn untrusted_page_cannot_issue_commands() {
        assert_eq!(
            route(&trust(), Some("http://evil.example.com"), &command_url()),
            NavigationRoute::Block
        );
    }

    #[test]
    fn trusted_navigation_between_environments_is_allowed() {
        assert_eq!(
            route(&trust(), Some(PRODUCTION_URL), DEVELOPMENT_URL),
            NavigationRoute::Allow
        );
    }

    #[test]
    fn untrusted_target_is_blocked() {
        assert_eq!(
            route(&trust(), Some(PRODUCTION_URL), "http://evil.example.com"),
            NavigationRoute::Block
        );
    }
}
