// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// qcvoc-core — Shared types, configuration, and error definitions for the
// QCVOC kiosk shell.

pub mod config;
pub mod error;
pub mod notices;
pub mod types;

pub use config::ShellConfig;
pub use error::ShellError;
pub use types::*;
