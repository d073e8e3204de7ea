pub mod advise;
pub mod clinics;
pub mod config;
pub mod sentiment;
pub mod serve;

use colored::Colorize;
use pulsepath_core::Config;
use std::path::Path;

/// File (explicit path or the default search list) first, then environment overrides.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?,
        None => Config::load_default()?,
    };

    Ok(config.merge_env())
}

pub fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), err);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 5000\n\n[places]\ndefault_radius = 750").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.places.default_radius, 750);
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Some(Path::new("/nonexistent/pulsepath.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/pulsepath.toml"));
    }
}
