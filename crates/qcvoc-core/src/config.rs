// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// Shell configuration.

use serde::{Deserialize, Serialize};

use crate::types::Environment;

/// Content origin served to the kiosk fleet.
pub const PRODUCTION_URL: &str = "http://qcvoc-prod.s3-website-us-east-1.amazonaws.com";
/// Content origin for development builds of the web app.
pub const DEVELOPMENT_URL: &str = "http://qcvoc-dev.s3-website-us-east-1.amazonaws.com";

/// Shell settings.
///
/// Both content origins are compiled in; there is no runtime configuration
/// surface. The struct exists so the constants live in one place and tests
/// can substitute their own values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// URL loaded on startup and whenever the environment flips to production.
    pub production_url: String,
    /// URL loaded whenever the environment flips to development.
    pub development_url: String,
    /// Window title.
    pub window_title: String,
    /// Initial window width in logical pixels.
    pub window_width: f64,
    /// Initial window height in logical pixels.
    pub window_height: f64,
    /// Side length of the square photo delivered to the page, in pixels.
    pub photo_edge: u32,
    /// JPEG quality (1-100) for the photo data URL.
    pub jpeg_quality: u8,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            production_url: PRODUCTION_URL.to_owned(),
            development_url: DEVELOPMENT_URL.to_owned(),
            window_title: "QCVOC".to_owned(),
            window_width: 480.0,
            window_height: 800.0,
            photo_edge: 300,
            jpeg_quality: 70,
        }
    }
}

impl ShellConfig {
    /// The content URL for the given environment.
    pub fn content_url(&self, environment: Environment) -> &str {
        match environment {
            Environment::Production => &self.production_url,
            Environment::Development => &self.development_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_url_follows_environment() {
        let config = ShellConfig::default();
        assert_eq!(config.content_url(Environment::Production), PRODUCTION_URL);
        assert_eq!(config.content_url(Environment::Development), DEVELOPMENT_URL);
    }
}
