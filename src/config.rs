use crate::*;
use confique::Config as _;
use std::path::PathBuf;

/// Optional config file, read after the environment.
pub const CONFIG_FILE: &str = "sqlcell.toml";

#[derive(Debug, confique::Config)]
pub struct Config {
    /// JSON file holding the `SQL_KEY_WORD` array.
    #[config(env = "SQLCELL_KEYWORD_FILE", default = "keyword.json")]
    pub keyword_file: PathBuf,
    /// SQL text to tokenize.
    #[config(env = "SQLCELL_SQL_FILE", default = "sample.sql")]
    pub sql_file: PathBuf,
    /// Filter used when `RUST_LOG` is unset.
    #[config(env = "SQLCELL_LOG_LEVEL", default = "info")]
    pub log_level: String,
    #[config(env = "SQLCELL_PRETTY", default = true)]
    pub pretty: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Config::builder().env().file(CONFIG_FILE).load()?)
    }
}
