// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

// --- Config ---

/// Default config file, used when `--config` is not given.
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os("SHLEXER_CONFIG")
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

// --- Logging ---

/// Log filter directives, e.g. `shlexer=debug`.
pub fn log_filter() -> Option<String> {
    std::env::var("SHLEXER_LOG").ok().filter(|s| !s.is_empty())
}
