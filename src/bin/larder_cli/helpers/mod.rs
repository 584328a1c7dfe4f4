// ABOUTME: Helper modules for larder-cli
// ABOUTME: Terminal output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

pub mod display;
