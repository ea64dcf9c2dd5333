// ABOUTME: Re-exports command modules for veganizer-cli
// ABOUTME: Recipe conversion and search, impact scoring, and reference data reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod impact;
pub mod recipes;
pub mod reference;
