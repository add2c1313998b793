//! Config merger — raw project config + GC baseline → [`ServerConfig`].

use std::str::FromStr;

use crate::config::loader::ConfigError;
use crate::config::types::{GcTuning, RawConfig, ServerConfig};

pub const GC_MINOR_HEAP_SIZE_KEY: &str = "gc_minor_heap_size";
pub const GC_SPACE_OVERHEAD_KEY: &str = "gc_space_overhead";
pub const ASSUME_PHP_KEY: &str = "assume_php";

/// Derive runtime tuning from the project config.
///
/// Absent keys fall back to `baseline` (or `true` for `assume_php`).
/// A key that is present but malformed is an error, never a fallback.
pub fn merge(raw: &RawConfig, baseline: GcTuning) -> Result<ServerConfig, ConfigError> {
    let minor_heap_size = parse_or(raw, GC_MINOR_HEAP_SIZE_KEY, baseline.minor_heap_size, "an integer")?;
    let space_overhead = parse_or(raw, GC_SPACE_OVERHEAD_KEY, baseline.space_overhead, "an integer")?;
    let assume_php = parse_or(raw, ASSUME_PHP_KEY, true, "`true` or `false`")?;

    Ok(ServerConfig {
        gc: GcTuning {
            minor_heap_size,
            space_overhead,
        },
        assume_php,
    })
}

fn parse_or<T: FromStr>(
    raw: &RawConfig,
    key: &str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match raw.get(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected,
        }),
    }
}
