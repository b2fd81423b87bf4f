reexport!(testing, test);
reexport!(config);
reexport!(error);
reexport!(sql);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.log_level);

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_structural() => {
            error!(position = err.position(), "Malformed SQL: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Tokenize the configured SQL file and print the cells as JSON.
async fn run(config: &Config) -> Result {
    info!(
        keyword_file = %config.keyword_file.display(),
        sql_file = %config.sql_file.display(),
        "Begin..."
    );
    let (keyword_json, sql) = tokio::try_join!(
        tokio::fs::read_to_string(&config.keyword_file),
        tokio::fs::read_to_string(&config.sql_file),
    )?;

    let keywords = KeywordSet::from_json(&keyword_json)?;
    if keywords.is_empty() {
        warn!("Keyword dictionary is empty, every word is an identifier");
    }
    let cells = tokenize(&keywords, &sql)?;
    info!(
        cells = cells.len(),
        depth = cells.iter().map(Cell::depth).max().unwrap_or(0),
        "Tokenized"
    );

    let json = if config.pretty {
        serde_json::to_string_pretty(&cells)?
    } else {
        serde_json::to_string(&cells)?
    };
    println!("{json}");
    Ok(())
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
