// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Logging for the starter site generator.
//!
//! Usage:
//! - Set STARTER_LOG=off (default) - no logs
//! - Set STARTER_LOG=info - one line per build step
//! - Set STARTER_LOG=debug - every page and asset written
//!
//! The `--verbose` flag of the CLI forces `debug` regardless of the variable.

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

/// Environment variable consulted by [`init_diagnostics`].
pub const LOG_ENV: &str = "STARTER_LOG";

static INIT: Once = Once::new();

/// Log levels accepted in `STARTER_LOG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// Parse a level name, case-insensitively. Returns `None` for unknown names.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "off" | "none" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }

    fn as_emit(self) -> Option<emit::Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(emit::Level::Error),
            LogLevel::Warn => Some(emit::Level::Warn),
            LogLevel::Info => Some(emit::Level::Info),
            LogLevel::Debug => Some(emit::Level::Debug),
        }
    }
}

/// Initialize diagnostics from `STARTER_LOG`.
///
/// Safe to call multiple times; only the first call has an effect.
pub fn init_diagnostics() {
    init_with(None);
}

/// Initialize diagnostics, letting `forced` take precedence over the environment.
pub fn init_with(forced: Option<LogLevel>) {
    INIT.call_once(|| {
        let level = match forced {
            Some(level) => level,
            None => {
                let raw = std::env::var(LOG_ENV).unwrap_or_default();
                match LogLevel::parse(&raw) {
                    Some(level) => level,
                    None => {
                        // Logging is not up yet, so this has to go straight to stderr
                        eprintln!("Warning: Unknown {} value '{}', using 'info'", LOG_ENV, raw);
                        LogLevel::Info
                    }
                }
            }
        };

        let Some(min) = level.as_emit() else {
            return;
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(min))
            .init();

        // The runtime lives for the rest of the process
        std::mem::forget(rt);
    });
}

/// Log build steps users normally want to see.
///
/// Examples: "Rendered 2 pages", "Copied 3 static assets"
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log per-file detail useful when debugging a build.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log conditions that don't stop the build (broken anchors, empty nav groups).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log failures that abort the build.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

/// Re-export the init function for convenience
pub use init_diagnostics as init;
