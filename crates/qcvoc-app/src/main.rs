// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// QCVOC — native kiosk shell for the QCVOC volunteer organization web app.
//
// Entry point. Initialises logging and launches the WebView shell.

mod services;
mod shell;

use qcvoc_core::ShellConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("QCVOC shell starting");

    if let Err(err) = shell::run(ShellConfig::default()) {
        tracing::error!(error = %err, "shell failed to start");
        std::process::exit(1);
    }
}
