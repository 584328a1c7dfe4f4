// ABOUTME: Re-exports command modules for larder-cli
// ABOUTME: Provides recipe lookup and device favorites commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

pub mod favorites;
pub mod recipes;
