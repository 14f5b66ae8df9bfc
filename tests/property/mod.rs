// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module

mod merge_laws;
mod reference_parsing;
