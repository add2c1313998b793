//! Argument classifier — raw args → classified args.

use crate::args::registry::{FlagArity, FlagDef, FlagEffect};
use crate::error::OptionsError;

/// A classified argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedArg {
    /// Known flag with its value, if it takes one.
    Flag {
        effect: FlagEffect,
        flag: String, // normalized to long form
        value: Option<String>,
    },
    /// Bare token: a candidate project root.
    Positional(String),
}

/// Classify raw args against the registry.
///
/// A valued flag takes the next token verbatim, even when it is empty or
/// looks like a flag. Unknown flags and missing values are usage errors.
pub fn classify(raw_args: &[String], registry: &[FlagDef]) -> Result<Vec<ClassifiedArg>, OptionsError> {
    let mut args = Vec::with_capacity(raw_args.len());
    let mut iter = raw_args.iter();

    while let Some(arg) = iter.next() {
        if !is_flag(arg) {
            args.push(ClassifiedArg::Positional(arg.clone()));
            continue;
        }

        let Some(def) = registry.iter().find(|d| d.matches(arg)) else {
            return Err(OptionsError::usage(format!("{}: unknown option", arg)));
        };

        let value = match def.arity {
            FlagArity::NoValue => None,
            FlagArity::RequiresValue(_) => match iter.next() {
                Some(next) => Some(next.clone()),
                None => {
                    return Err(OptionsError::usage(format!(
                        "{}: missing required value",
                        def.long
                    )))
                }
            },
        };

        args.push(ClassifiedArg::Flag {
            effect: def.effect,
            flag: def.long.to_string(),
            value,
        });
    }

    Ok(args)
}

// A lone "-" is a path, not a flag.
fn is_flag(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-')
}
