//! Configuration module for scrapey
//!
//! Loads a JSON config (by default `configs/default.json`), fills zero-valued
//! fields with defaults and hands the result to the CLI, which layers flag
//! overrides on top through [`ConfigOverride`].
//!
//! # Example
//!
//! ```no_run
//! use scrapey::config::{Config, ConfigOverride, LoadOptions, ScrapingOptionsOverride};
//!
//! let mut config = Config::load("configs/default.json", &LoadOptions::default())
//!     .expect("Failed to load config");
//!
//! let overrides = ConfigOverride {
//!     scraping_options: Some(ScrapingOptionsOverride {
//!         max_depth: Some(5),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//! for change in overrides.apply(&mut config) {
//!     println!("{change}");
//! }
//! ```

pub mod fields;
pub mod overrides;
pub mod schema;

pub use fields::{print_non_empty_fields, Field, FieldSet};
pub use overrides::{
    AppliedOverride, ConfigOverride, DataFormattingOverride, ParseRulesOverride,
    ScrapingOptionsOverride, StorageOverride, UrlOverride,
};
pub use schema::Config;

use crate::error::{Result, ScrapeyError};
use crate::output::{Palette, Tone};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Config file used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "configs/default.json";

/// Knobs for [`Config::load`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Dump every non-empty string field after loading
    pub verbose: bool,
    pub palette: Palette,
}

impl Config {
    /// Load, default and report a config file, writing diagnostics to stdout
    pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let stdout = io::stdout();
        Self::load_with_output(path, options, &mut stdout.lock())
    }

    /// Same as [`Config::load`] with diagnostics going to `out`.
    ///
    /// Writes `Loaded config from: <path>` on success, the non-empty string
    /// fields when `options.verbose` is set, and a red error line on failure.
    pub fn load_with_output<W: Write + ?Sized>(
        path: impl AsRef<Path>,
        options: &LoadOptions,
        out: &mut W,
    ) -> Result<Self> {
        let path = path.as_ref();
        let palette = options.palette;

        let mut config = match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(path = %path.display(), "Config load failed: {e}");
                palette
                    .line(
                        out,
                        "Error loading config: ",
                        &path.display().to_string(),
                        Tone::Red,
                    )
                    .ok();
                return Err(e);
            }
        };

        config.apply_defaults();

        palette
            .line(
                out,
                "Loaded config from: ",
                &path.display().to_string(),
                Tone::BrightGreen,
            )
            .ok();
        if options.verbose {
            print_non_empty_fields(out, palette, "", &config).ok();
        }

        Ok(config)
    }

    /// Read and parse `path` without defaulting
    fn read(path: &Path) -> Result<Self> {
        tracing::debug!("Reading config from {}", path.display());

        let content = fs::read(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ScrapeyError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ScrapeyError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        serde_json::from_slice(&content).map_err(|source| ScrapeyError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
