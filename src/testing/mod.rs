#![cfg(test)]
crate::reexport!(context);
use crate::KeywordSet;
pub use rstest::*;

pub(in crate::testing) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

/// Keyword set shared by the tokenizer tests; mirrors `keyword.json`.
pub fn standard_keywords() -> KeywordSet {
    KeywordSet::new([
        "SELECT", "SELECT DISTINCT", "DISTINCT", "FROM", "WHERE", "AND", "OR", "NOT", "AS", "ON",
        "IN", "IS", "IS NOT", "IS NULL", "IS NOT NULL", "NULL", "LIKE", "BETWEEN", "JOIN",
        "INNER", "INNER JOIN", "LEFT", "LEFT JOIN", "LEFT OUTER", "LEFT OUTER JOIN", "RIGHT",
        "RIGHT JOIN", "GROUP", "GROUP BY", "ORDER", "ORDER BY", "HAVING", "LIMIT", "UNION", "UNION ALL",
        "INSERT", "INSERT INTO", "VALUES", "UPDATE", "SET", "DELETE", "DELETE FROM", "CASE",
        "WHEN", "THEN", "ELSE", "END", "ASC", "DESC",
    ])
}

mod keyword_context_tests {
    use super::{super::*, *};

    #[test_context(KeywordContext)]
    #[test]
    fn context_provides_standard_keywords(ctx: &mut KeywordContext) {
        assert_eq!(ctx.keywords, standard_keywords());
        assert!(ctx.keywords.contains("group by"));
        assert!(!ctx.keywords.contains("count"));
    }

    #[test]
    fn keyword_file_matches_standard_keywords() {
        let json = include_str!("../../keyword.json");
        let keywords = KeywordSet::from_json(json).expect("keyword.json is valid");
        assert_eq!(keywords, standard_keywords());
    }
}
