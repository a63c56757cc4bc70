//! Extraction profiles
//!
//! Tuning parameters for detection and padding are grouped into named
//! profiles loaded from a TOML registry. The registry embedded at build
//! time ships three profiles (default, tight, wide); a registry can also
//! be loaded from a file to override them.

use std::collections::HashMap;
use std::fs;

use lazy_static::lazy_static;

use crate::extractor::errors::{ExtractError, ExtractResult};
use crate::extractor::DEFAULT_PADDING_RATIO;

lazy_static! {
    // Parse the embedded registry at startup
    pub static ref PROFILES: ProfileRegistry = {
        let content = include_str!("../profiles.toml");
        ProfileRegistry::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse profile definitions: {}", e);
            ProfileRegistry::default()
        })
    };
}

/// One named set of detection and padding parameters
#[derive(Debug, Clone)]
pub struct Profile {
    /// Profile name as registered
    pub name: String,
    /// Fraction of the box width added as padding on every edge
    pub padding_ratio: f64,
    /// Gaussian blur sigma applied before edge detection
    pub blur_sigma: f32,
    /// Lower Canny hysteresis threshold
    pub canny_low: f32,
    /// Upper Canny hysteresis threshold
    pub canny_high: f32,
    /// Minimum edge-pixel count for a contour candidate
    pub min_region_area: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            name: "default".to_string(),
            padding_ratio: DEFAULT_PADDING_RATIO,
            blur_sigma: 1.5,
            canny_low: 50.0,
            canny_high: 100.0,
            min_region_area: 64,
        }
    }
}

/// Container for the named extraction profiles
#[derive(Debug)]
pub struct ProfileRegistry {
    profiles: HashMap<String, Profile>,
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        // Always keep a usable "default" profile, even when the embedded
        // registry fails to parse.
        let mut profiles = HashMap::new();
        profiles.insert("default".to_string(), Profile::default());
        ProfileRegistry { profiles }
    }
}

impl ProfileRegistry {
    /// Parse a profile registry from a TOML string
    ///
    /// # Arguments
    /// * `content` - TOML text with a `[profiles.<name>]` table per profile
    ///
    /// # Returns
    /// The registry, or an error when the TOML is invalid or defines no
    /// profiles
    pub fn from_str(content: &str) -> ExtractResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => {
                return Err(ExtractError::GenericError(format!(
                    "Failed to parse TOML: {}",
                    e
                )))
            }
        };

        let mut profiles = HashMap::new();

        if let Some(table) = toml_value.get("profiles").and_then(|v| v.as_table()) {
            for (name, value) in table {
                profiles.insert(name.clone(), Self::parse_profile(name, value));
            }
        }

        if profiles.is_empty() {
            return Err(ExtractError::GenericError(
                "No profiles defined".to_string(),
            ));
        }

        Ok(ProfileRegistry { profiles })
    }

    /// Parse one profile table, falling back to defaults for missing keys
    fn parse_profile(name: &str, value: &toml::Value) -> Profile {
        let base = Profile::default();
        Profile {
            name: name.to_string(),
            padding_ratio: value
                .get("padding_ratio")
                .and_then(|v| v.as_float())
                .unwrap_or(base.padding_ratio),
            blur_sigma: value
                .get("blur_sigma")
                .and_then(|v| v.as_float())
                .map(|v| v as f32)
                .unwrap_or(base.blur_sigma),
            canny_low: value
                .get("canny_low")
                .and_then(|v| v.as_float())
                .map(|v| v as f32)
                .unwrap_or(base.canny_low),
            canny_high: value
                .get("canny_high")
                .and_then(|v| v.as_float())
                .map(|v| v as f32)
                .unwrap_or(base.canny_high),
            min_region_area: value
                .get("min_region_area")
                .and_then(|v| v.as_integer())
                .map(|v| v as u32)
                .unwrap_or(base.min_region_area),
        }
    }

    /// Load a profile registry from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to a registry file in the same format as the
    ///   embedded `profiles.toml`
    pub fn from_file(path: &str) -> ExtractResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(ExtractError::IoError(e)),
        };
        Self::from_str(&contents)
    }

    /// Look up a profile by name
    pub fn get(&self, name: &str) -> ExtractResult<&Profile> {
        self.profiles
            .get(name)
            .ok_or_else(|| ExtractError::UnknownProfile(name.to_string()))
    }

    /// Get the registered profile names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}
