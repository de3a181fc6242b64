// src/config.rs
use anyhow::{bail, Result};
use std::env;
use std::path::PathBuf;

/// Which `LanguageModel` the server runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserBackend {
    Rules,
    Remote,
}

impl ParserBackend {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "rules" => Ok(ParserBackend::Rules),
            "remote" => Ok(ParserBackend::Remote),
            other => bail!("unknown PARSER_BACKEND '{}', expected 'rules' or 'remote'", other),
        }
    }
}

/// Parse service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    // Server configuration
    pub listen_addr: String,
    pub listen_port: u16,
    pub request_timeout_secs: u64,
    pub max_body_bytes: usize,

    // Parser configuration
    pub parser_backend: ParserBackend,
    pub parser_endpoint: String,
    pub semantics_dir: Option<PathBuf>,

    // Logging
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Result<Self> {
        Ok(AppConfig {
            // Server configuration
            listen_addr: env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string()),
            listen_port: env::var("LISTEN_PORT")
                .unwrap_or_else(|_| "9000".to_string())
                .parse()?,
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()?,
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .unwrap_or_else(|_| "1048576".to_string())
                .parse()?,

            // Parser configuration
            parser_backend: ParserBackend::parse(
                &env::var("PARSER_BACKEND").unwrap_or_else(|_| "rules".to_string()),
            )?,
            parser_endpoint: env::var("PARSER_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:9001/parse".to_string()),
            semantics_dir: env::var("SEMANTICS_DIR")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),

            // Logging
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listen_addr, self.listen_port)
    }
}

/// Settings of the `expand_semantics` tool
#[derive(Debug, Clone)]
pub struct SemanticsConfig {
    pub relationship_graph_path: PathBuf,
    pub output_dir: PathBuf,
    pub categories_file: Option<PathBuf>,
    pub relation_code: String,
    pub relation_pos: String,
}

impl SemanticsConfig {
    pub fn from_env() -> Result<Self> {
        Ok(SemanticsConfig {
            relationship_graph_path: env::var("RELATIONSHIP_GRAPH_PATH")
                .unwrap_or_else(|_| {
                    "/opt/kai/data/wordnet/wordnet-3.1-relationship-graph.txt".to_string()
                })
                .into(),
            output_dir: env::var("SEMANTICS_OUTPUT_DIR")
                .unwrap_or_else(|_| ".".to_string())
                .into(),
            categories_file: env::var("SEMANTIC_CATEGORIES_FILE")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            relation_code: env::var("RELATION_CODE").unwrap_or_else(|_| "2".to_string()),
            relation_pos: env::var("RELATION_POS").unwrap_or_else(|_| "n".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_names() {
        assert_eq!(ParserBackend::parse("rules").unwrap(), ParserBackend::Rules);
        assert_eq!(ParserBackend::parse(" Remote ").unwrap(), ParserBackend::Remote);
        assert!(ParserBackend::parse("spacy").is_err());
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig {
            listen_addr: "127.0.0.1".to_string(),
            listen_port: 9000,
            request_timeout_secs: 60,
            max_body_bytes: 1024,
            parser_backend: ParserBackend::Rules,
            parser_endpoint: "http://localhost:9001/parse".to_string(),
            semantics_dir: None,
            log_level: "info".to_string(),
        };
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }
}
