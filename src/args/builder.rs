//! Transient flag state — classified args folded into one mutable value.
//!
//! Lives only for one resolution pass; [`crate::args::OptionsResolver`]
//! converts it into the immutable [`crate::ServerOptions`].

use std::path::PathBuf;

use crate::args::classifier::ClassifiedArg;
use crate::args::mode::resolve_check_mode;
use crate::args::registry::FlagEffect;
use crate::args::startup::{FileSource, StartupAction};
use crate::error::OptionsError;
use crate::options::ClientProvenance;

/// Last `--save`/`--load` seen, kept raw until the root is known.
///
/// `--load` may read a file, so it is only resolved once the command line
/// has been accepted as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum StartupRequest {
    #[default]
    Fresh,
    Save(String),
    Load(String),
}

impl StartupRequest {
    pub fn resolve(&self, files: &dyn FileSource) -> Result<StartupAction, OptionsError> {
        match self {
            Self::Fresh => Ok(StartupAction::Fresh),
            Self::Save(path) => Ok(StartupAction::save(path)),
            Self::Load(spec) => StartupAction::load(spec, files),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FlagState {
    pub debug: bool,
    pub check: bool,
    pub json: bool,
    pub detach: bool,
    pub provenance: ClientProvenance,
    pub convert: Option<PathBuf>,
    pub startup: StartupRequest,
    pub version: bool,
    pub start_time: Option<f64>,
    pub help: bool,
    pub root: Option<String>,
}

impl FlagState {
    /// Fold classified args in order. Later occurrences overwrite earlier ones.
    ///
    /// Touches no files; see [`StartupRequest::resolve`].
    pub fn from_classified(args: &[ClassifiedArg]) -> Result<Self, OptionsError> {
        let mut state = Self::default();
        for arg in args {
            state.apply(arg)?;
        }
        Ok(state)
    }

    fn apply(&mut self, arg: &ClassifiedArg) -> Result<(), OptionsError> {
        let (effect, flag, value) = match arg {
            ClassifiedArg::Positional(token) => {
                if let Some(previous) = self.root.replace(token.clone()) {
                    tracing::debug!(previous = %previous, root = %token, "root candidate replaced");
                }
                return Ok(());
            }
            ClassifiedArg::Flag { effect, flag, value } => (*effect, flag, value.as_deref()),
        };

        match effect {
            FlagEffect::Debug => self.debug = true,
            FlagEffect::Check => self.check = true,
            FlagEffect::Json => self.json = true,
            FlagEffect::Daemon => self.detach = true,
            FlagEffect::FromVim => self.provenance.from_vim = true,
            FlagEffect::FromEmacs => self.provenance.from_emacs = true,
            FlagEffect::FromHhclient => self.provenance.from_hhclient = true,
            FlagEffect::Version => self.version = true,
            FlagEffect::Help => self.help = true,
            FlagEffect::Convert => self.convert = Some(PathBuf::from(required(flag, value)?)),
            FlagEffect::Save => self.set_startup(StartupRequest::Save(required(flag, value)?.to_string())),
            FlagEffect::Load => self.set_startup(StartupRequest::Load(required(flag, value)?.to_string())),
            FlagEffect::StartTime => {
                let raw = required(flag, value)?;
                let seconds = raw
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|s| s.is_finite())
                    .ok_or_else(|| {
                        OptionsError::usage(format!("{}: expected a number of seconds, got '{}'", flag, raw))
                    })?;
                self.start_time = Some(seconds);
            }
        }
        Ok(())
    }

    fn set_startup(&mut self, request: StartupRequest) {
        if self.startup != StartupRequest::Fresh {
            tracing::debug!(previous = ?self.startup, "startup action overridden by later flag");
        }
        self.startup = request;
    }

    pub fn check_mode(&self) -> bool {
        resolve_check_mode(self.check, self.json, self.convert.is_some())
    }
}

fn required<'a>(flag: &str, value: Option<&'a str>) -> Result<&'a str, OptionsError> {
    value.ok_or_else(|| OptionsError::usage(format!("{}: missing required value", flag)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::classifier::classify;
    use crate::args::registry::flag_registry;
    use std::io;
    use std::path::Path;

    /// Fails the test if anything tries to read a file.
    struct NoFiles;

    impl FileSource for NoFiles {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            panic!("unexpected read of {}", path.display())
        }
    }

    fn fold(args: &[&str]) -> Result<FlagState, OptionsError> {
        let raw: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let classified = classify(&raw, &flag_registry())?;
        FlagState::from_classified(&classified)
    }

    #[test]
    fn last_positional_wins() {
        let state = fold(&["foo", "bar"]).unwrap();
        assert_eq!(state.root.as_deref(), Some("bar"));
    }

    #[test]
    fn later_load_overwrites_save() {
        let state = fold(&["--save", "s", "--load", "a"]).unwrap();
        assert_eq!(state.startup, StartupRequest::Load("a".into()));
        assert_eq!(
            state.startup.resolve(&NoFiles).unwrap(),
            StartupAction::Load {
                state_file: "a".into(),
                to_recheck: vec![],
            }
        );
    }

    #[test]
    fn later_save_overwrites_load() {
        let state = fold(&["--load", "a", "--save", "s"]).unwrap();
        assert_eq!(state.startup.resolve(&NoFiles).unwrap(), StartupAction::save("s"));
    }

    #[test]
    fn json_implies_check_mode() {
        let state = fold(&["--json", "www"]).unwrap();
        assert!(state.json);
        assert!(state.check_mode());
    }

    #[test]
    fn convert_implies_check_mode() {
        let state = fold(&["--convert", "out", "www"]).unwrap();
        assert_eq!(state.convert, Some(PathBuf::from("out")));
        assert!(state.check_mode());
    }

    #[test]
    fn provenance_flags_are_recorded() {
        let state = fold(&["--from-vim", "--from-hhclient"]).unwrap();
        assert!(state.provenance.from_vim);
        assert!(!state.provenance.from_emacs);
        assert!(state.provenance.from_hhclient);
        assert!(!state.check_mode());
    }

    #[test]
    fn start_time_is_parsed() {
        let state = fold(&["--start-time", "1700000000.5"]).unwrap();
        assert_eq!(state.start_time, Some(1_700_000_000.5));
    }

    #[test]
    fn malformed_start_time_is_usage_error() {
        let err = fold(&["--start-time", "yesterday"]).unwrap_err();
        assert!(matches!(err, OptionsError::Usage { .. }));
    }

    #[test]
    fn non_finite_start_time_is_usage_error() {
        for raw in ["NaN", "inf", "-inf"] {
            let err = fold(&["--start-time", raw]).unwrap_err();
            assert!(matches!(err, OptionsError::Usage { .. }), "{raw} gave {err:?}");
        }
    }

    #[test]
    fn load_is_not_resolved_while_folding() {
        let state = fold(&["--load", "a b c", "--load", "a list"]).unwrap();
        assert_eq!(state.startup, StartupRequest::Load("a list".into()));
    }

    #[test]
    fn bad_load_fails_on_resolve() {
        let state = fold(&["--load", "a b c", "www"]).unwrap();
        let err = state.startup.resolve(&NoFiles).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidArgument { .. }));
    }
}
