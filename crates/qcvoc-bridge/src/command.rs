// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// Command parsing for intercepted navigations.
//
// A bridge command travels in the query string of a navigation request:
// `command=<name>&callback=<identifier>`. Anything that does not parse is
// simply not a command; the navigation then falls through to the ordinary
// allow/deny decision.

use crate::callback::CallbackId;

/// The two capture flows the hosted page can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeCommand {
    Scan,
    AcquirePhoto,
}

impl BridgeCommand {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "scan" => Some(Self::Scan),
            "acquirePhoto" => Some(Self::AcquirePhoto),
            _ => None,
        }
    }
}

/// A recognized bridge command plus the callback that should receive its
/// result. Extracted per-request; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: BridgeCommand,
    pub callback: CallbackId,
}

/// Extract a bridge command from a raw query string.
///
/// The query splits on the first `&` into a `key=value` command token, whose
/// value names the action, and a callback token, whose value is the callback
/// identifier. An absent query, an unrecognized action, a token without `=`,
/// or an invalid callback identifier all yield `None`.
pub fn parse_query(query: Option<&str>) -> Option<ParsedCommand> {
    let query = query?;
    let (command_token, callback_token) = query.split_once('&')?;
    let (_, action) = command_token.split_once('=')?;
    let command = BridgeCommand::from_name(action)?;

    let raw_callback = callback_token
        .split_once('=')
        .map(|(_, value)| value)
        .unwrap_or(callback_token);
    let callback = CallbackId::parse(raw_callback)?;

    Some(ParsedCommand { command, callback })
}
