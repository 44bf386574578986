// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// Callback identifiers and the JavaScript invocation strings that deliver
// capture results into the hosted page.
//
// The callback name and the payload are both page-controlled data headed for
// `evaluate_script`, so both are constrained here: identifiers must match a
// dotted-identifier grammar, payloads are escaped for a single-quoted string
// literal. Nothing else in the crate builds JavaScript.

use std::borrow::Cow;
use std::fmt;

/// The name of a global function in the hosted page, e.g. `onScan` or
/// `window.barcodeScanned`.
///
/// Only dotted chains of JavaScript identifiers are representable; anything
/// else is rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackId(String);

impl CallbackId {
    /// Parse a raw callback identifier.
    ///
    /// Accepts `ident(.ident)*` where `ident` is `[A-Za-z_$][A-Za-z0-9_$]*`.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.split('.').all(is_identifier) {
            Some(Self(raw.to_owned()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// A complete JavaScript expression ready for `evaluate_script`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsInvocation(String);

impl JsInvocation {
    /// `<callback>('<payload>');` with the payload escaped for a
    /// single-quoted literal.
    pub fn with_text(callback: &CallbackId, payload: &str) -> Self {
        Self(format!("{}('{}');", callback.as_str(), escape_single_quoted(payload)))
    }

    /// `<callback>(null);`, delivered when a capture flow ends with no
    /// result, so the page can stop waiting.
    pub fn cancelled(callback: &CallbackId) -> Self {
        Self(format!("{}(null);", callback.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JsInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape a payload for inclusion in a single-quoted JavaScript string
/// literal. Plain payloads (digits, base64 data URLs) pass through borrowed.
pub fn escape_single_quoted(payload: &str) -> Cow<'_, str> {
    fn needs_escape(c: char) -> bool {
        matches!(c, '\\' | '\'' | '\u{2028}' | '\u{2029}') || c.is_control()
    }

    if !payload.chars().any(needs_escape) {
        return Cow::Borrowed(payload);
    }

    let mut out = String::with_capacity(payload.len() + 8);
    for c in payload.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_dotted_identifiers() {
        for raw in ["onScan", "window.barcodeScanned", "$cb", "_x9", "a.b.c"] {
            assert!(CallbackId::parse(raw).is_some(), "{raw} should parse");
        }
    }

    #[test]
    fn rejects_non_identifiers() {
        for raw in ["", "9lives", "alert(1)", "a..b", "a.", ".a", "on Scan", "cb;evil"] {
            assert!(CallbackId::parse(raw).is_none(), "{raw} should be rejected");
        }
    }

    #[test]
    fn scan_invocation_is_byte_exact() {
        let cb = CallbackId::parse("onScan").unwrap();
        assert_eq!(JsInvocation::with_text(&cb, "12345").as_str(), "onScan('12345');");
    }

    #[test]
    fn cancellation_invocation_passes_null() {
        let cb = CallbackId::parse("onScan").unwrap();
        assert_eq!(JsInvocation::cancelled(&cb).as_str(), "onScan(null);");
    }

    #[test]
    fn payload_quotes_and_backslashes_are_escaped() {
        let cb = CallbackId::parse("cb").unwrap();
        assert_eq!(
            JsInvocation::with_text(&cb, r"it's a \ test").as_str(),
            r"cb('it\'s a \\ test');"
        );
    }

    #[test]
    fn control_characters_are_escaped() {
        assert_eq!(escape_single_quoted("a\nb\u{0001}c"), "a\\nb\\u0001c");
        assert_eq!(escape_single_quoted("\u{2028}"), "\\u2028");
    }

    #[test]
    fn clean_payloads_borrow() {
        assert!(matches!(
            escape_single_quoted("data:image/jpeg;base64,AAAA"),
            Cow::Borrowed(_)
        ));
    }
}
