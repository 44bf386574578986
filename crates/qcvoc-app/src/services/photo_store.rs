// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// Camera target allocation — a fresh `photo*.jpg` under the app's pictures
// directory for each photo flow. The camera writes into the file; the
// bridge removes it after the data URL is delivered.

use std::path::PathBuf;

use tracing::debug;

use qcvoc_bridge::traits::PhotoStorage;
use qcvoc_core::error::{Result, ShellError};

use super::data_dir;

/// Allocates camera target files under the app data directory.
pub struct TempPhotoStorage {
    dir: PathBuf,
}

impl TempPhotoStorage {
    pub fn new() -> Self {
        Self { dir: data_dir::data_subdir("pictures") }
    }
}

impl Default for TempPhotoStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoStorage for TempPhotoStorage {
    fn allocate(&self) -> Result<PathBuf> {
        let file = tempfile::Builder::new()
            .prefix("photo")
            .suffix(".jpg")
            .tempfile_in(&self.dir)
            .map_err(|err| ShellError::PhotoStorage(err.to_string()))?;
        // Keep the file on disk; the camera overwrites it and the bridge
        // removes it once the flow completes.
        let path = file
            .into_temp_path()
            .keep()
            .map_err(|err| ShellError::PhotoStorage(err.to_string()))?;
        debug!(path = %path.display(), "camera target allocated");
        Ok(path)
    }
}
