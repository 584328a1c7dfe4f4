// ABOUTME: Error types for the server crate, re-exported from the shared core crate
// ABOUTME: AppError carries an ErrorCode that maps to the HTTP status callers see
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

pub use larder_core::errors::*;
