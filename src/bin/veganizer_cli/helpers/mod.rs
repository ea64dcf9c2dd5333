// ABOUTME: Re-exports helper modules for veganizer-cli
// ABOUTME: Provides access to output formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
