//! The resolved, immutable server options.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::args::StartupAction;
use crate::config::{GcTuning, ServerConfig};

/// Which client launched the server. Recorded, never acted on here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientProvenance {
    pub from_vim: bool,
    pub from_emacs: bool,
    pub from_hhclient: bool,
}

/// Startup configuration of the server.
///
/// Built once per process by [`crate::args::OptionsResolver`] or
/// [`ServerOptions::default_for_root`]; read-only afterwards, so it can be
/// cloned into worker threads or processes freely.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerOptions {
    check_mode: bool,
    json_mode: bool,
    root: PathBuf,
    should_detach: bool,
    convert: Option<PathBuf>,
    startup: StartupAction,
    version: bool,
    start_time: f64,
    gc: GcTuning,
    assume_php: bool,
    debug: bool,
    provenance: ClientProvenance,
}

/// Fields gathered by the resolver before assembly.
pub(crate) struct OptionsParts {
    pub check_mode: bool,
    pub json_mode: bool,
    pub root: PathBuf,
    pub should_detach: bool,
    pub convert: Option<PathBuf>,
    pub startup: StartupAction,
    pub version: bool,
    pub start_time: f64,
    pub config: ServerConfig,
    pub debug: bool,
    pub provenance: ClientProvenance,
}

impl ServerOptions {
    pub(crate) fn assemble(parts: OptionsParts) -> Self {
        Self {
            check_mode: parts.check_mode,
            json_mode: parts.json_mode,
            root: parts.root,
            should_detach: parts.should_detach,
            convert: parts.convert,
            startup: parts.startup,
            version: parts.version,
            start_time: parts.start_time,
            gc: parts.config.gc,
            assume_php: parts.config.assume_php,
            debug: parts.debug,
            provenance: parts.provenance,
        }
    }

    /// Options for `root` with every other field at its default.
    ///
    /// No argument parsing, root validation or config read happens here.
    pub fn default_for_root(root: impl Into<PathBuf>) -> Self {
        Self::assemble(OptionsParts {
            check_mode: false,
            json_mode: false,
            root: root.into(),
            should_detach: false,
            convert: None,
            startup: StartupAction::Fresh,
            version: false,
            start_time: now_seconds(),
            config: ServerConfig::default(),
            debug: false,
            provenance: ClientProvenance::default(),
        })
    }

    /// Check once and exit, rather than running as a server.
    pub fn check_mode(&self) -> bool {
        self.check_mode
    }

    /// Machine-readable output requested.
    pub fn json_mode(&self) -> bool {
        self.json_mode
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn should_detach(&self) -> bool {
        self.should_detach
    }

    pub fn convert(&self) -> Option<&Path> {
        self.convert.as_deref()
    }

    pub fn startup(&self) -> &StartupAction {
        &self.startup
    }

    pub fn version(&self) -> bool {
        self.version
    }

    /// Process start, in seconds since the Unix epoch.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// GC tuning for the server process.
    pub fn gc(&self) -> GcTuning {
        self.gc
    }

    /// GC tuning for spawned workers.
    pub fn worker_gc(&self) -> GcTuning {
        self.gc.for_workers()
    }

    pub fn assume_php(&self) -> bool {
        self.assume_php
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn provenance(&self) -> ClientProvenance {
        self.provenance
    }
}

/// Current wall-clock time in seconds since the Unix epoch.
pub(crate) fn now_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
