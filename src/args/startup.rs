//! Startup action resolver — `--save` / `--load` into a [`StartupAction`].

use std::io;
use std::path::{Path, PathBuf};

use crate::error::OptionsError;

/// What to do with persisted server state at launch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StartupAction {
    /// No `--save` or `--load`: start from scratch.
    #[default]
    Fresh,
    /// Load state, then recheck the listed files.
    Load {
        state_file: PathBuf,
        to_recheck: Vec<PathBuf>,
    },
    /// Save state to a file.
    Save { state_file: PathBuf },
}

/// Reads files named on the command line.
pub trait FileSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// [`FileSource`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl FileSource for FsSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl StartupAction {
    /// Action for `--save <path>`.
    pub fn save(path: &str) -> Self {
        Self::Save {
            state_file: PathBuf::from(path),
        }
    }

    /// Action for `--load <spec>`.
    ///
    /// `spec` is `STATE_FILE [RECHECK_LIST_FILE]`, separated by whitespace.
    /// The recheck list file holds one path per line.
    pub fn load(spec: &str, files: &dyn FileSource) -> Result<Self, OptionsError> {
        let tokens: Vec<&str> = spec.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Err(OptionsError::invalid_argument(
                "--load needs at least one argument",
            )),
            [state_file] => Ok(Self::Load {
                state_file: PathBuf::from(state_file),
                to_recheck: Vec::new(),
            }),
            [state_file, recheck_list] => {
                let path = Path::new(recheck_list);
                let content = files
                    .read_to_string(path)
                    .map_err(|source| OptionsError::Io {
                        path: path.to_path_buf(),
                        source,
                    })?;
                Ok(Self::Load {
                    state_file: PathBuf::from(state_file),
                    to_recheck: recheck_lines(&content),
                })
            }
            _ => Err(OptionsError::invalid_argument(
                "--load takes at most 2 arguments",
            )),
        }
    }
}

fn recheck_lines(content: &str) -> Vec<PathBuf> {
    content
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory file source for tests.
    struct MemFiles(HashMap<PathBuf, String>);

    impl MemFiles {
        fn with(path: &str, content: &str) -> Self {
            Self(HashMap::from([(PathBuf::from(path), content.to_string())]))
        }
    }

    impl FileSource for MemFiles {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }

    #[test]
    fn load_single_token() {
        let action = StartupAction::load("a", &MemFiles(HashMap::new())).unwrap();
        assert_eq!(
            action,
            StartupAction::Load {
                state_file: "a".into(),
                to_recheck: vec![],
            }
        );
    }

    #[test]
    fn load_with_recheck_list() {
        let files = MemFiles::with("b", "x\ny\n");
        let action = StartupAction::load("a b", &files).unwrap();
        assert_eq!(
            action,
            StartupAction::Load {
                state_file: "a".into(),
                to_recheck: vec!["x".into(), "y".into()],
            }
        );
    }

    #[test]
    fn recheck_list_accepts_crlf_and_blank_lines() {
        let files = MemFiles::with("list", "x\n\ny\r\n\r\n");
        let action = StartupAction::load("a list", &files).unwrap();
        assert_eq!(
            action,
            StartupAction::Load {
                state_file: "a".into(),
                to_recheck: vec!["x".into(), "y".into()],
            }
        );
    }

    #[test]
    fn load_splits_on_whitespace_runs() {
        let files = MemFiles::with("list", "f.php");
        let action = StartupAction::load("  state \t list ", &files).unwrap();
        assert!(matches!(
            action,
            StartupAction::Load { state_file, to_recheck }
                if state_file == Path::new("state") && to_recheck == vec![PathBuf::from("f.php")]
        ));
    }

    #[test]
    fn load_empty_spec_is_rejected() {
        let err = StartupAction::load("", &FsSource).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidArgument { .. }));
        assert!(err.to_string().contains("needs at least one argument"));

        assert!(StartupAction::load("   ", &FsSource).is_err());
    }

    #[test]
    fn load_three_tokens_is_rejected() {
        let err = StartupAction::load("a b c", &FsSource).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidArgument { .. }));
        assert!(err.to_string().contains("at most 2 arguments"));
    }

    #[test]
    fn unreadable_recheck_list_propagates() {
        let err = StartupAction::load("a missing", &MemFiles(HashMap::new())).unwrap_err();
        match err {
            OptionsError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("missing"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io, got {other:?}"),
        }
    }

    #[test]
    fn save_sets_state_file() {
        assert_eq!(
            StartupAction::save("s"),
            StartupAction::Save {
                state_file: "s".into()
            }
        );
    }
}
