//! Index configuration.
//!
//! Logging is configured per index rather than through a process-wide
//! switch: [`IndexConfig`] carries the maximum level to emit and, optionally,
//! the [`log::Log`] sink records go to. Without an injected sink, records
//! that pass the level go to whatever logger the application installed.

use std::fmt;
use std::sync::Arc;

use log::{Level, LevelFilter, Log, Record};

/// Log target used for every record an index emits.
pub const LOG_TARGET: &str = "sifter";

/// Construction-time settings for an index.
///
/// # Example
///
/// ```
/// use sifter::{Index, IndexConfig, LevelFilter};
///
/// let config = IndexConfig::new().level(LevelFilter::Debug);
/// let index = Index::with_config(vec!["apple".into()], config);
/// assert_eq!(index.search("$ap").len(), 1);
/// ```
#[derive(Clone)]
pub struct IndexConfig {
    level: LevelFilter,
    sink: Option<Arc<dyn Log>>,
}

impl IndexConfig {
    /// Creates the default configuration: `Warn` level, no injected sink.
    pub fn new() -> Self {
        IndexConfig::default()
    }

    /// Sets the most verbose level this index emits.
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Sends records to `sink` instead of the global logger.
    pub fn sink(mut self, sink: Arc<dyn Log>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Returns `true` if a record at `level` would be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level
    }

    pub(crate) fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        let record = Record::builder()
            .level(level)
            .target(LOG_TARGET)
            .args(args)
            .build();
        match &self.sink {
            Some(sink) => {
                if sink.enabled(record.metadata()) {
                    sink.log(&record);
                }
            }
            None => {
                let logger = log::logger();
                if logger.enabled(record.metadata()) {
                    logger.log(&record);
                }
            }
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            level: LevelFilter::Warn,
            sink: None,
        }
    }
}

impl fmt::Debug for IndexConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexConfig")
            .field("level", &self.level)
            .field("sink", &self.sink.as_ref().map(|_| "<injected>"))
            .finish()
    }
}
