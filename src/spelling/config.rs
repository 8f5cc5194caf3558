//! Policy knobs of the fuzzy corrector.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FuzzfixError, Result};
use crate::spelling::kgram::{DEFAULT_BOUNDARY_MARKER, DEFAULT_KGRAM_SIZE};

/// Configuration for the fuzzy corrector.
///
/// The defaults were tuned on one corpus; the ratio and the length buckets
/// usually need retuning for another language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Length of the k-grams used for candidate retrieval.
    pub kgram_size: usize,
    /// Marker prepended to a word's first `kgram_size - 1` characters.
    pub boundary_marker: char,
    /// A correction must be at least this many times more frequent than the misspelling.
    pub misspell_ratio: usize,
    /// Words shorter than this use `short_max_distance`.
    pub short_word_len: usize,
    /// Words at least this long use `long_max_distance`.
    pub long_word_len: usize,
    /// Edit distance ceiling for short words.
    pub short_max_distance: usize,
    /// Edit distance ceiling for words between the two thresholds.
    pub medium_max_distance: usize,
    /// Edit distance ceiling for long words.
    pub long_max_distance: usize,
    /// Retrieve and filter candidates on the rayon thread pool.
    pub parallel: bool,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            kgram_size: DEFAULT_KGRAM_SIZE,
            boundary_marker: DEFAULT_BOUNDARY_MARKER,
            misspell_ratio: 27,
            short_word_len: 5,
            long_word_len: 10,
            short_max_distance: 0,
            medium_max_distance: 1,
            long_max_distance: 2,
            parallel: false,
        }
    }
}

impl CorrectorConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CorrectorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values can be used together.
    pub fn validate(&self) -> Result<()> {
        if self.kgram_size == 0 {
            return Err(FuzzfixError::invalid_config(
                "kgram_size must be at least 1",
            ));
        }
        if self.misspell_ratio == 0 {
            return Err(FuzzfixError::invalid_config(
                "misspell_ratio must be at least 1",
            ));
        }
        if self.short_word_len > self.long_word_len {
            return Err(FuzzfixError::invalid_config(format!(
                "short_word_len ({}) must be <= long_word_len ({})",
                self.short_word_len, self.long_word_len
            )));
        }
        Ok(())
    }

    /// Edit distance ceiling for a word of `len` characters.
    pub fn max_distance_for(&self, len: usize) -> usize {
        if len < self.short_word_len {
            self.short_max_distance
        } else if len < self.long_word_len {
            self.medium_max_distance
        } else {
            self.long_max_distance
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ceilings() {
        let config = CorrectorConfig::default();

        assert_eq!(config.max_distance_for(0), 0);
        assert_eq!(config.max_distance_for(4), 0);
        assert_eq!(config.max_distance_for(5), 1);
        assert_eq!(config.max_distance_for(9), 1);
        assert_eq!(config.max_distance_for(10), 2);
        assert_eq!(config.max_distance_for(25), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let config = CorrectorConfig {
            kgram_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FuzzfixError::InvalidConfig(_))
        ));

        let config = CorrectorConfig {
            short_word_len: 12,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CorrectorConfig {
            misspell_ratio: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json() {
        let config: CorrectorConfig =
            serde_json::from_str(r#"{"misspell_ratio": 10, "parallel": true}"#).unwrap();

        assert_eq!(config.misspell_ratio, 10);
        assert!(config.parallel);
        assert_eq!(config.kgram_size, 3);
        assert_eq!(config.boundary_marker, '$');
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"kgram_size": 2}"#).unwrap();

        let config = CorrectorConfig::load_from_file(&path).unwrap();
        assert_eq!(config.kgram_size, 2);

        fs::write(&path, r#"{"kgram_size": 0}"#).unwrap();
        assert!(CorrectorConfig::load_from_file(&path).is_err());

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            CorrectorConfig::load_from_file(&path),
            Err(FuzzfixError::Json(_))
        ));
    }
}
