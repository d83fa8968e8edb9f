use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::alphabet::{self, Alphabet};
use crate::encoders::algorithms::bijective::{self, BijectiveCodec};
use crate::encoders::algorithms::bounded::{self, BoundedCodec};
use crate::encoders::algorithms::errors::{SchemeNotFoundError, find_closest_scheme};

/// One of the two numeral systems, bound to an alphabet.
#[derive(Debug, Clone, Copy)]
pub enum Codec {
    Bounded(&'static BoundedCodec),
    Bijective(&'static BijectiveCodec),
}

/// A named pairing of alphabet and numeral system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// Bounded `u64` codec, 64-symbol URL-safe alphabet.
    #[default]
    Base64,
    /// Bounded `u64` codec, 32-symbol alphabet immune to case folding.
    Base32,
    /// Unbounded codec, 64-symbol URL-safe alphabet.
    Big64,
    /// Unbounded codec, 32-symbol alphabet.
    Big32,
}

impl Scheme {
    pub const ALL: [Scheme; 4] = [Scheme::Base64, Scheme::Base32, Scheme::Big64, Scheme::Big32];

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Base64 => "base64",
            Scheme::Base32 => "base32",
            Scheme::Big64 => "big64",
            Scheme::Big32 => "big32",
        }
    }

    /// Looks a scheme up by name, suggesting the closest one on a miss.
    pub fn from_name(name: &str) -> Result<Self, SchemeNotFoundError> {
        let wanted = name.trim().to_ascii_lowercase();
        if let Some(scheme) = Self::ALL.iter().find(|s| s.name() == wanted) {
            return Ok(*scheme);
        }

        let names: Vec<&str> = Self::ALL.iter().map(|s| s.name()).collect();
        let suggestion = find_closest_scheme(&wanted, &names).map(str::to_string);
        Err(SchemeNotFoundError::new(name, suggestion))
    }

    pub fn alphabet(&self) -> &'static Alphabet {
        match self {
            Scheme::Base64 | Scheme::Big64 => &alphabet::BASE64_URL,
            Scheme::Base32 | Scheme::Big32 => &alphabet::BASE32,
        }
    }

    /// The codec behind this scheme.
    pub fn codec(&self) -> Codec {
        match self {
            Scheme::Base64 => Codec::Bounded(&bounded::BASE64),
            Scheme::Base32 => Codec::Bounded(&bounded::BASE32),
            Scheme::Big64 => Codec::Bijective(&bijective::BIG64),
            Scheme::Big32 => Codec::Bijective(&bijective::BIG32),
        }
    }

    /// The bounded codec, for `base64` and `base32`.
    pub fn bounded(&self) -> Option<&'static BoundedCodec> {
        match self.codec() {
            Codec::Bounded(codec) => Some(codec),
            Codec::Bijective(_) => None,
        }
    }

    /// The unbounded codec, for `big64` and `big32`.
    pub fn bijective(&self) -> Option<&'static BijectiveCodec> {
        match self.codec() {
            Codec::Bijective(codec) => Some(codec),
            Codec::Bounded(_) => None,
        }
    }

    /// Longest identifier, if the scheme is bounded.
    pub fn max_len(&self) -> Option<usize> {
        self.bounded().map(BoundedCodec::max_len)
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Scheme {
    type Err = SchemeNotFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Scheme used when none is given on the command line
    #[serde(default)]
    pub default_scheme: Option<Scheme>,
}

/// Settings loaded from TOML files.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Parses a configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The built-in configuration bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../shortening.toml");
        Ok(Self::from_toml(content)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads the built-in configuration with user overrides.
    ///
    /// Searches in priority order:
    /// 1. Built-in settings (from library)
    /// 2. `~/.config/shortening/config.toml` (user overrides)
    /// 3. `./shortening.toml` (project-local overrides)
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut paths = Vec::with_capacity(2);
        if let Some(path) = user_config_path() {
            paths.push(path);
        }
        paths.push(PathBuf::from("shortening.toml"));
        Self::load_layered(&paths)
    }

    /// Built-in settings overridden by each existing file in `paths`, in order.
    ///
    /// Missing files are skipped; unreadable or malformed ones are logged and
    /// skipped.
    pub fn load_layered(paths: &[PathBuf]) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        for path in paths {
            if !path.exists() {
                tracing::trace!(path = %path.display(), "no config file");
                continue;
            }
            match Self::load_from_file(path) {
                Ok(layer) => {
                    tracing::debug!(path = %path.display(), "loaded config override");
                    config.merge(layer);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to load config");
                }
            }
        }

        Ok(config)
    }

    /// Values set in `other` replace the ones in `self`.
    pub fn merge(&mut self, other: Config) {
        if other.settings.default_scheme.is_some() {
            self.settings.default_scheme = other.settings.default_scheme;
        }
    }

    pub fn default_scheme(&self) -> Scheme {
        self.settings.default_scheme.unwrap_or_default()
    }
}

/// `<config dir>/shortening/config.toml`, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shortening").join("config.toml"))
}
