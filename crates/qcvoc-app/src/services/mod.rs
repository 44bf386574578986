// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (c) QC Coders. All rights reserved. See LICENSE file in the project root.
//
// Local services backing the shell: data directory resolution and camera
// target allocation.

pub mod data_dir;
pub mod photo_store;
