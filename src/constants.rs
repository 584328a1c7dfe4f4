// ABOUTME: Constants for the server crate, re-exported from the shared core crate
// ABOUTME: Limits, provider endpoints, mock catalog ids, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

pub use larder_core::constants::*;
