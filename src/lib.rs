//! Startup option resolution for the analysis server.
//!
//! Combines command-line flags, the project's `.hhconfig` and compiled-in
//! defaults into one immutable [`ServerOptions`] before any other subsystem
//! starts. Any failure is fatal; see [`OptionsError::exit_code`].

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod root;

pub use args::{parse_options, OptionsResolver, StartupAction};
pub use config::{GcTuning, RawConfig};
pub use error::OptionsError;
pub use options::{ClientProvenance, ServerOptions};
