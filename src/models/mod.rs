// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scene, hotspot and session state.

pub mod hotspot;
pub mod scene;
pub mod session;
pub mod store;
pub mod text;
