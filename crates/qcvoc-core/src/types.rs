// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// Core domain types for the QCVOC shell.

use serde::{Deserialize, Serialize};

/// Which content origin the shell is pointed at.
///
/// Mutated only by the hidden key gesture; lives in process memory for the
/// shell's lifetime and resets to `Production` on restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    #[default]
    Production,
    Development,
}

impl Environment {
    /// The other environment.
    pub fn toggled(self) -> Self {
        match self {
            Self::Production => Self::Development,
            Self::Development => Self::Production,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Development => write!(f, "development"),
        }
    }
}
