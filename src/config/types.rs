use std::collections::HashMap;

/// Already-parsed project configuration: string keys to string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    values: HashMap<String, String>,
}

impl RawConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, replacing any earlier value for it.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a raw value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (key, value) in iter {
            config.insert(key, value);
        }
        config
    }
}

/// Garbage-collector sizing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GcTuning {
    /// Minor heap size, in words.
    pub minor_heap_size: usize,
    /// Major GC speed, as a percentage of live data.
    pub space_overhead: u32,
}

impl GcTuning {
    /// Compiled-in baseline for the server process.
    pub const BASELINE: GcTuning = GcTuning {
        minor_heap_size: 256 * 1024,
        space_overhead: 80,
    };

    /// Space overhead used by short-lived worker processes.
    pub const WORKER_SPACE_OVERHEAD: u32 = 200;

    /// Looser profile handed to worker processes.
    ///
    /// Workers are short-lived, so they trade memory for fewer major
    /// collections. The minor heap is kept as resolved.
    pub fn for_workers(&self) -> GcTuning {
        GcTuning {
            minor_heap_size: self.minor_heap_size,
            space_overhead: Self::WORKER_SPACE_OVERHEAD,
        }
    }
}

impl Default for GcTuning {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// Result of merging a [`RawConfig`] with compiled-in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub gc: GcTuning,
    pub assume_php: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            gc: GcTuning::BASELINE,
            assume_php: true,
        }
    }
}
