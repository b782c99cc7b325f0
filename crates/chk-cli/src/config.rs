//! Configuration loading and management.

use std::path::{Path, PathBuf};

use chk_export::PdfOptions;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory exports are written to when `--out-dir` is not given.
    pub output_dir: PathBuf,
    /// First heading line of PDF exports.
    pub report_title: String,
    /// Second heading line of PDF exports.
    pub report_subtitle: String,
}

impl Default for Config {
    fn default() -> Self {
        let heading = PdfOptions::default();
        Self {
            output_dir: PathBuf::from("."),
            report_title: heading.title,
            report_subtitle: heading.subtitle,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (CHECADOR_*)
        figment = figment.merge(Env::prefixed("CHECADOR_"));

        figment.extract()
    }

    /// Heading used for PDF exports.
    pub fn pdf_options(&self) -> PdfOptions {
        PdfOptions {
            title: self.report_title.clone(),
            subtitle: self.report_subtitle.clone(),
        }
    }
}

/// Returns the platform-specific config directory for checador.
///
/// On Linux: `~/.config/checador`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("checador"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_config_path_ends_with_checador() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "checador");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.report_title, "PASTELERIA CAFE CHOCOLATE");
        assert_eq!(config.report_subtitle, "Control de Personal");
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("checador.toml");
        std::fs::write(
            &path,
            "output_dir = \"/srv/reportes\"\nreport_title = \"SUCURSAL NORTE\"\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/srv/reportes"));
        assert_eq!(config.report_title, "SUCURSAL NORTE");
        assert_eq!(config.report_subtitle, "Control de Personal");
    }

    #[test]
    fn test_pdf_options_follow_config() {
        let config = Config {
            report_subtitle: "Asistencia".to_string(),
            ..Config::default()
        };
        let options = config.pdf_options();
        assert_eq!(options.title, "PASTELERIA CAFE CHOCOLATE");
        assert_eq!(options.subtitle, "Asistencia");
    }
}
