use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
pub use duration::Duration;
use encoders_models::site::SiteContent;
use serde::Deserialize;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads the configuration from the given TOML files. Later files override
/// values of earlier ones.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub contact: ContactConfig,
    pub notify: NotifyConfig,
    pub site: SiteContent,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Simulated latency of sending a contact message.
    pub send_delay: Duration,
    /// How long the success screen stays visible before the form resets.
    pub reset_delay: Duration,
}

#[derive(Debug, Deserialize)]
pub struct NotifyConfig {
    pub success: String,
    pub failure: String,
    pub send_failure: String,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use encoders_models::site::SitePage;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn load_default_config() {
        let config = load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();

        assert_eq!(*config.contact.reset_delay, std::time::Duration::from_secs(3));
        assert_eq!(*config.contact.send_delay, std::time::Duration::from_secs(1));
        assert_eq!(
            config
                .site
                .navigation
                .iter()
                .map(|link| link.path.as_str())
                .collect::<Vec<_>>(),
            SitePage::ALL.map(SitePage::path)
        );
    }

    #[test]
    fn later_files_override_earlier_ones() {
        let dir = std::env::temp_dir().join(format!("encoders-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let override_path = dir.join("override.toml");
        let mut file = std::fs::File::create(&override_path).unwrap();
        writeln!(file, "[contact]\nreset_delay = \"10s\"").unwrap();

        let config = load(&[Path::new(DEFAULT_CONFIG_PATH), override_path.as_path()]).unwrap();

        assert_eq!(*config.contact.reset_delay, std::time::Duration::from_secs(10));
        assert_eq!(*config.contact.send_delay, std::time::Duration::from_secs(1));
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_file() {
        let result = load(&[Path::new("/this/file/does/not/exist.toml")]);

        assert!(result.is_err());
    }
}
