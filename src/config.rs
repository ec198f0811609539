use crate::model::{ConfigError, Institution, KeywordSpec};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct InstitutionConfig {
    pub institution: Institution,
    pub directory: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub institutions: Vec<InstitutionConfig>,
    pub keywords: Vec<KeywordSpec>,
    pub extra_stopwords: Vec<String>,
    pub min_token_len: usize,
    pub lexicon_path: Option<PathBuf>,
    pub output_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            institutions: vec![
                InstitutionConfig {
                    institution: Institution::Fed,
                    directory: PathBuf::from("usa-central-bank/fomc-statements"),
                },
                InstitutionConfig {
                    institution: Institution::Rbnz,
                    directory: PathBuf::from("nz-central-bank/ocr"),
                },
            ],
            keywords: ["inflation", "employment", "growth", "risk", "uncertainty"]
                .iter()
                .map(|w| KeywordSpec::single(w))
                .collect(),
            extra_stopwords: Vec::new(),
            min_token_len: 4,
            lexicon_path: None,
            output_path: PathBuf::from("quick_analysis_results.svg"),
        }
    }
}

/// Loads configuration from a JSON file. A missing file is not an error:
/// the built-in defaults cover the standard corpus layout.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => {
            serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
                path: path.to_string(),
                source,
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("No config file at {path}, using built-in defaults");
            Ok(AppConfig::default())
        }
        Err(source) => Err(ConfigError::Unreadable {
            path: path.to_string(),
            source,
        }),
    }
}
