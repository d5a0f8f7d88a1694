// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// webcrop — Core types, configuration, and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod hints;
pub mod report;
pub mod types;

pub use config::RenderConfig;
pub use error::WebcropError;
pub use report::{BatchReport, DerivativeRecord, FileReport, FileStatus};
pub use types::*;
