use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Only the
/// artifact path matters for correctness — bind/port just pick where the
/// server listens.
pub struct Config {
    /// Path to the serialized classifier artifact (JSON).
    pub model_path: PathBuf,
    /// Address the HTTP server binds to.
    pub bind: String,
    /// Port the HTTP server listens on.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default: the artifact path falls back to the
    /// platform data directory, and bind/port default to the address the
    /// original deployment used.
    pub fn load() -> Result<Self> {
        let model_path = env::var("LITMUS_MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_model_path());

        let port = match env::var("LITMUS_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("LITMUS_PORT is not a valid port: {raw}"))?,
            Err(_) => 5000,
        };

        Ok(Self {
            model_path,
            bind: env::var("LITMUS_BIND").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
        })
    }

    /// Check that the classifier artifact file exists.
    /// Call this before any operation that needs the model, so the failure
    /// happens at startup with a pointed message rather than per-request.
    pub fn require_model(&self) -> Result<()> {
        if !self.model_path.exists() {
            anyhow::bail!(
                "Classifier artifact not found: {}\n\
                 Export one from the training side, or set LITMUS_MODEL_PATH.",
                self.model_path.display()
            );
        }
        Ok(())
    }
}

/// Returns the default location of the classifier artifact.
/// Uses the platform data directory: ~/.local/share/litmus/model.json on Linux.
pub fn default_model_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("litmus")
        .join("model.json")
}
