//! Pipeline — ties all option resolution stages together.

use std::path::PathBuf;

use crate::args::builder::FlagState;
use crate::args::classifier::classify;
use crate::args::registry::{flag_registry, usage};
use crate::args::startup::{FileSource, FsSource};
use crate::config::{merge, ConfigReader, GcTuning, HhconfigReader};
use crate::error::OptionsError;
use crate::options::{now_seconds, OptionsParts, ServerOptions};
use crate::root::{HhconfigRoot, RootValidator};

/// Program name shown in usage text.
pub const PROGRAM_NAME: &str = "hh_server";

/// Resolves argv plus the project config into [`ServerOptions`].
///
/// Collaborators default to the filesystem-backed implementations and can
/// be swapped for tests or embedders.
pub struct OptionsResolver {
    validator: Box<dyn RootValidator>,
    config_reader: Box<dyn ConfigReader>,
    files: Box<dyn FileSource>,
    gc_baseline: GcTuning,
}

impl OptionsResolver {
    /// Resolver with default collaborators and the compiled-in GC baseline.
    pub fn new() -> Self {
        Self {
            validator: Box::new(HhconfigRoot),
            config_reader: Box::new(HhconfigReader),
            files: Box::new(FsSource),
            gc_baseline: GcTuning::BASELINE,
        }
    }

    pub fn with_validator(mut self, validator: impl RootValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn with_config_reader(mut self, reader: impl ConfigReader + 'static) -> Self {
        self.config_reader = Box::new(reader);
        self
    }

    /// Source for the `--load` recheck list.
    pub fn with_file_source(mut self, files: impl FileSource + 'static) -> Self {
        self.files = Box::new(files);
        self
    }

    /// GC values used when the project config does not override them.
    pub fn with_gc_baseline(mut self, baseline: GcTuning) -> Self {
        self.gc_baseline = baseline;
        self
    }

    /// Resolve `raw_args` (without the program name).
    ///
    /// Stops at the first failure. A missing root is reported before any
    /// collaborator runs: no recheck list is read, no root validated, no
    /// project config loaded.
    pub fn resolve(&self, raw_args: &[String]) -> Result<ServerOptions, OptionsError> {
        let captured_at = now_seconds();
        let registry = flag_registry();

        // Stage 1: Classify arguments
        let classified = classify(raw_args, &registry)?;

        // Stage 2: Fold flags
        let state = FlagState::from_classified(&classified)?;
        if state.help {
            return Err(OptionsError::Help {
                usage: usage(PROGRAM_NAME, &registry),
            });
        }

        // Stage 3: Root must be present
        let Some(root_token) = state.root.as_deref() else {
            return Err(OptionsError::usage(format!(
                "missing ROOT argument\n\n{}",
                usage(PROGRAM_NAME, &registry)
            )));
        };

        // Stage 4: Startup action (may read the recheck list)
        let startup = state.startup.resolve(self.files.as_ref())?;

        // Stage 5: Canonicalize and validate the root
        let root = canonical_root(root_token)?;
        self.validator.validate(&root)?;
        tracing::debug!(root = %root.display(), "project root validated");

        // Stage 6: Project config
        let raw_config = self.config_reader.read(&root)?;
        let config = merge(&raw_config, self.gc_baseline)?;
        tracing::debug!(
            keys = raw_config.len(),
            minor_heap_size = config.gc.minor_heap_size,
            space_overhead = config.gc.space_overhead,
            assume_php = config.assume_php,
            "project config merged"
        );

        // Stage 7: Assemble
        let check_mode = state.check_mode();
        Ok(ServerOptions::assemble(OptionsParts {
            check_mode,
            json_mode: state.json,
            root,
            should_detach: state.detach,
            convert: state.convert,
            startup,
            version: state.version,
            start_time: state.start_time.unwrap_or(captured_at),
            config,
            debug: state.debug,
            provenance: state.provenance,
        }))
    }
}

impl Default for OptionsResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve options with the default collaborators.
pub fn parse_options(raw_args: &[String]) -> Result<ServerOptions, OptionsError> {
    OptionsResolver::new().resolve(raw_args)
}

fn canonical_root(token: &str) -> Result<PathBuf, OptionsError> {
    std::fs::canonicalize(token).map_err(|e| OptionsError::Validation {
        root: PathBuf::from(token),
        reason: e.to_string(),
    })
}
