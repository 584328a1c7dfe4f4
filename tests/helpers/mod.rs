// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the axum request/response harness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
