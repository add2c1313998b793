//! Project configuration: the `.hhconfig` reader and the GC/compat merger.

mod loader;
mod merge;
mod types;

pub use loader::{ConfigError, ConfigReader, HhconfigReader, CONFIG_FILE_NAME};
pub use merge::{merge, ASSUME_PHP_KEY, GC_MINOR_HEAP_SIZE_KEY, GC_SPACE_OVERHEAD_KEY};
pub use types::{GcTuning, RawConfig, ServerConfig};
