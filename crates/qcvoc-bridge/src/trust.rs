// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// Origin trust check — the sole authorization boundary of the bridge.
//
// Only the two compiled-in content origins may issue bridge commands or be
// loaded in-app. Comparison is by exact origin (scheme + host + port);
// anything unparseable fails closed.

use url::{Origin, Url};

use qcvoc_core::config::ShellConfig;
use qcvoc_core::error::{Result, ShellError};

/// Validates that a URL belongs to one of the allowed content origins.
#[derive(Debug, Clone)]
pub struct TrustChecker {
    allowed: Vec<Origin>,
}

impl TrustChecker {
    /// Build the checker from the configured production and development URLs.
    pub fn from_config(config: &ShellConfig) -> Result<Self> {
        let allowed = [&config.production_url, &config.development_url]
            .into_iter()
            .map(|raw| {
                Url::parse(raw)
                    .map(|u| u.origin())
                    .map_err(|err| ShellError::Config(format!("{raw}: {err}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { allowed })
    }

    /// True iff `url` parses and its origin exactly matches an allowed one.
    pub fn is_trusted(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let origin = parsed.origin();
        // Opaque origins (data:, about:, file:) never match.
        if !origin.is_tuple() {
            return false;
        }
        self.allowed.contains(&origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcvoc_core::config::{DEVELOPMENT_URL, PRODUCTION_URL};

    fn checker() -> TrustChecker {
        TrustChecker::from_config(&ShellConfig::default()).unwrap()
    }

    #[test]
    fn both_configured_origins_are_trusted() {
        let trust = checker();
        assert!(trust.is_trusted(PRODUCTION_URL));
        assert!(trust.is_trusted(DEVELOPMENT_URL));
    }

    #[test]
    fn paths_and_queries_do_not_affect_trust() {
        let trust = checker();
        assert!(trust.is_trusted(&format!("{PRODUCTION_URL}/checkin?command=scan&callback=cb")));
    }

    #[test]
    fn lookalike_hosts_are_untrusted() {
        let trust = checker();
        assert!(!trust.is_trusted("http://evil.example.com"));
        assert!(!trust.is_trusted(
            "http://qcvoc-prod.s3-website-us-east-1.amazonaws.com.evil.example.com"
        ));
        assert!(!trust.is_trusted("http://sub.qcvoc-prod.s3-website-us-east-1.amazonaws.com"));
    }

    #[test]
    fn other_schemes_and_ports_are_untrusted() {
        let trust = checker();
        assert!(!trust.is_trusted("https://qcvoc-prod.s3-website-us-east-1.amazonaws.com"));
        assert!(!trust.is_trusted("http://qcvoc-prod.s3-website-us-east-1.amazonaws.com:8080"));
        assert!(!trust.is_trusted("ftp://qcvoc-prod.s3-website-us-east-1.amazonaws.com"));
    }

    #[test]
    fn unparseable_input_fails_closed() {
        let trust = checker();
        assert!(!trust.is_trusted(""));
        assert!(!trust.is_trusted("not a url"));
        assert!(!trust.is_trusted("about:blank"));
        assert!(!trust.is_trusted("data:text/html,<h1>hi</h1>"));
    }
}
