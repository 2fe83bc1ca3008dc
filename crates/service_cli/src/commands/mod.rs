//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands compute a
//! serialisable report and render it in the requested [`OutputFormat`].
//!
//! [`OutputFormat`]: crate::output::OutputFormat

pub mod check;
pub mod denoise;
pub mod eval;
pub mod fit;
pub mod generate;
pub mod interpolate;
pub mod optimise;
pub mod sample;
