//! Flag registry — single source of truth for all server flags.

use clap::{Arg, ArgAction, Command};

/// What a flag does to the options being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagEffect {
    Debug,
    Check,
    Json,
    Daemon,
    FromVim,
    FromEmacs,
    FromHhclient,
    Convert,
    Save,
    Load,
    Version,
    StartTime,
    Help,
}

/// Whether a flag takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    /// Boolean flag, no value (e.g., --check).
    NoValue,
    /// Consumes exactly the next token; carries the placeholder shown in help.
    RequiresValue(&'static str),
}

/// A single flag definition.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Primary long form (e.g., "--daemon").
    pub long: &'static str,
    /// Optional short form (e.g., "-d").
    pub short: Option<&'static str>,
    /// Does it take a value?
    pub arity: FlagArity,
    /// What it sets.
    pub effect: FlagEffect,
    /// Human-readable description (for help text).
    pub description: &'static str,
}

/// Build the complete flag registry.
///
/// `--json` is consumed by editor and linter integrations; its name and
/// meaning are a compatibility contract.
pub fn flag_registry() -> Vec<FlagDef> {
    vec![
        FlagDef {
            long: "--debug",
            short: None,
            arity: FlagArity::NoValue,
            effect: FlagEffect::Debug,
            description: "Debug mode",
        },
        FlagDef {
            long: "--check",
            short: None,
            arity: FlagArity::NoValue,
            effect: FlagEffect::Check,
            description: "Check and exit",
        },
        FlagDef {
            long: "--json",
            short: None,
            arity: FlagArity::NoValue,
            effect: FlagEffect::Json,
            description: "Output errors in json format (arc lint mode)",
        },
        FlagDef {
            long: "--daemon",
            short: Some("-d"),
            arity: FlagArity::NoValue,
            effect: FlagEffect::Daemon,
            description: "Detach process",
        },
        FlagDef {
            long: "--from-vim",
            short: None,
            arity: FlagArity::NoValue,
            effect: FlagEffect::FromVim,
            description: "Passed from hh_client",
        },
        FlagDef {
            long: "--from-emacs",
            short: None,
            arity: FlagArity::NoValue,
            effect: FlagEffect::FromEmacs,
            description: "Passed from hh_client",
        },
        FlagDef {
            long: "--from-hhclient",
            short: None,
            arity: FlagArity::NoValue,
            effect: FlagEffect::FromHhclient,
            description: "Passed from hh_client",
        },
        FlagDef {
            long: "--convert",
            short: None,
            arity: FlagArity::RequiresValue("PATH"),
            effect: FlagEffect::Convert,
            description: "Adds type annotations automatically",
        },
        FlagDef {
            long: "--save",
            short: None,
            arity: FlagArity::RequiresValue("FILE"),
            effect: FlagEffect::Save,
            description: "Save server state to file",
        },
        FlagDef {
            long: "--load",
            short: None,
            arity: FlagArity::RequiresValue("SPEC"),
            effect: FlagEffect::Load,
            description: "Load server state; SPEC is \"STATE_FILE [RECHECK_LIST_FILE]\"",
        },
        FlagDef {
            long: "--version",
            short: None,
            arity: FlagArity::NoValue,
            effect: FlagEffect::Version,
            description: "Print version and exit",
        },
        FlagDef {
            long: "--start-time",
            short: None,
            arity: FlagArity::RequiresValue("SECONDS"),
            effect: FlagEffect::StartTime,
            description: "Start time of the monitor, in seconds since the Unix epoch",
        },
        FlagDef {
            long: "--help",
            short: Some("-h"),
            arity: FlagArity::NoValue,
            effect: FlagEffect::Help,
            description: "Show help",
        },
    ]
}

impl FlagDef {
    /// Check if this definition matches the given argument string.
    pub fn matches(&self, arg: &str) -> bool {
        arg == self.long || (self.short == Some(arg))
    }

    fn to_clap_arg(&self) -> Arg {
        let id = self.long.trim_start_matches('-');
        let mut arg = Arg::new(id).long(id).help(self.description);
        if let Some(short) = self.short.and_then(|s| s.trim_start_matches('-').chars().next()) {
            arg = arg.short(short);
        }
        match self.arity {
            FlagArity::NoValue => arg.action(ArgAction::SetTrue),
            FlagArity::RequiresValue(name) => arg.value_name(name).action(ArgAction::Set),
        }
    }
}

/// Render the usage text for `program` from the registry.
pub fn usage(program: &'static str, registry: &[FlagDef]) -> String {
    let mut command = Command::new(program)
        .about("Analysis server: resolves its options and starts checking ROOT")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .args(registry.iter().map(FlagDef::to_clap_arg))
        .arg(
            Arg::new("root")
                .value_name("ROOT")
                .help("Project root directory (must contain a .hhconfig file)"),
        );
    command.render_help().to_string()
}
