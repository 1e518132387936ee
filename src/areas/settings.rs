use anyhow::Context;
use derive_new::new;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const ROOT_ENV: &str = "GIT_DOLLY_PATH";
const DEFAULT_ROOT_DIR: &str = "src";

/// Where repositories get cloned
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Settings {
    root: PathBuf,
}

impl Settings {
    /// `GIT_DOLLY_PATH`, or `~/src` when it is unset or empty
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_sources(std::env::var_os(ROOT_ENV), dirs::home_dir())
    }

    pub fn from_sources(
        root_override: Option<OsString>,
        home: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        if let Some(root) = root_override.filter(|root| !root.is_empty()) {
            return Ok(Self::new(PathBuf::from(root)));
        }

        let home = home
            .with_context(|| format!("could not determine home directory, set {ROOT_ENV}"))?;

        Ok(Self::new(home.join(DEFAULT_ROOT_DIR)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
