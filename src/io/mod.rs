// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for scene images and scene documents.

pub mod document;
pub mod loader;
pub mod media;
pub mod serialization;
