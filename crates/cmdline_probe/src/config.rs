use std::path::Path;

use anyhow::Context as _;

use crate::Kind;

#[derive(Default, Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    pub endpoints: Endpoints,
    pub run: Run,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Endpoints {
    pub host_a: String,
    pub host_b: String,
    pub port_a: u16,
    pub port_b: u16,
    pub local_a: String,
    pub local_b: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            host_a: "10.1.1.10".into(),
            host_b: "10.1.1.11".into(),
            port_a: 25000,
            port_b: 25001,
            local_a: "127.0.0.1".into(),
            local_b: "127.0.0.1".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Run {
    pub kind: Kind,
    /// In seconds.
    pub timeout: f64,
}

impl Default for Run {
    fn default() -> Self {
        Self {
            kind: Kind::One,
            timeout: 30.0,
        }
    }
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "probe.toml";
    pub const PATH_VAR: &'static str = "PROBE_CONFIG";

    /// Loads from `$PROBE_CONFIG`, or `probe.toml` when that isn't set.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(Self::PATH_VAR).unwrap_or_else(|_| Self::DEFAULT_PATH.into());
        Self::load_from_file(path)
    }

    /// A missing file gives the defaults, anything else wrong with it is an
    /// error.
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("cannot find '{}', using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("cannot read '{}'", path.display()))
            }
        };

        toml::from_str(&data).with_context(|| format!("invalid config in '{}'", path.display()))
    }
}
