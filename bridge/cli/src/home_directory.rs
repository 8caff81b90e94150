use {anyhow::anyhow, std::path::PathBuf};

/// Where the CLI keeps its files.
pub struct HomeDirectory {
    home: PathBuf,
}

impl HomeDirectory {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// Use the given path, or `~/.bridge` if none.
    pub fn new_or_default(home: Option<PathBuf>) -> anyhow::Result<Self> {
        match home {
            Some(home) => Ok(Self::new(home)),
            None => home::home_dir()
                .map(|dir| Self::new(dir.join(".bridge")))
                .ok_or_else(|| anyhow!("failed to find the user's home directory")),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.home
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join("app.toml")
    }

    /// Router config and router addresses saved by `bridge deployment`.
    pub fn deployment_file(&self) -> PathBuf {
        self.home.join("deployment.json")
    }
}
