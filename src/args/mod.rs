//! Command-line handling for the server.
//!
//! ```text
//! argv → Classify → Fold flags (+ startup action) → Resolve mode → Assemble → ServerOptions
//! ```
//!
//! Each stage is a plain function or value that can be unit-tested on its own.

mod builder;
mod classifier;
mod mode;
mod pipeline;
mod registry;
mod startup;

pub use classifier::{classify, ClassifiedArg};
pub use mode::resolve_check_mode;
pub use pipeline::{parse_options, OptionsResolver, PROGRAM_NAME};
pub use registry::{flag_registry, usage, FlagArity, FlagDef, FlagEffect};
pub use startup::{FileSource, FsSource, StartupAction};
