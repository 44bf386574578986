// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// Hidden environment-toggle gesture.
//
// A fixed sequence of volume-key presses flips the shell between the
// production and development content URLs. One state variable (the match
// index) and one output (the flipped environment); any non-matching input
// resets the index.

use tracing::debug;

use qcvoc_core::types::Environment;

/// Symbolic input codes fed to the gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKey {
    VolumeUp,
    VolumeDown,
}

use GestureKey::{VolumeDown as Down, VolumeUp as Up};

/// The unlock sequence. Twelve presses, known to the development team only.
const ENVIRONMENT_CODE: [GestureKey; 12] =
    [Up, Up, Up, Down, Up, Up, Down, Up, Up, Up, Up, Down];

/// Tracks progress through the unlock sequence and owns the environment
/// state. Starts in production; resets to production on process restart by
/// construction.
#[derive(Debug)]
pub struct EnvironmentToggle {
    index: usize,
    environment: Environment,
}

impl EnvironmentToggle {
    pub fn new() -> Self {
        Self { index: 0, environment: Environment::Production }
    }

    /// The currently selected environment.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Feed one key press. Returns the new environment when the full
    /// sequence has just been matched, `None` otherwise.
    pub fn input(&mut self, key: GestureKey) -> Option<Environment> {
        if key == ENVIRONMENT_CODE[self.index] {
            self.index += 1;
        } else {
            self.index = 0;
        }

        if self.index == ENVIRONMENT_CODE.len() {
            self.index = 0;
            self.environment = self.environment.toggled();
            debug!(environment = %self.environment, "environment gesture completed");
            return Some(self.environment);
        }
        None
    }
}

impl Default for EnvironmentToggle {
    fn default() -> Self {
        Self::new()
    }
}
