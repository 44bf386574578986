// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// qcvoc-media — Photo processing for the QCVOC capture bridge.
//
// Turns a raw camera capture into the square JPEG data URL delivered to the
// hosted page, using the `image` crate for decode/transform/encode.

pub mod photo;

pub use photo::{PhotoArtifact, PhotoPipeline};
