use crate::{KeywordSet, testing::*};
use test_context::TestContext;
pub use test_context::test_context;

/// Tokenizer test context: tracing set up once, standard keyword set loaded.
pub struct KeywordContext {
    pub keywords: KeywordSet,
}

impl TestContext for KeywordContext {
    fn setup() -> Self {
        crate::testing::common_init();
        Self {
            keywords: standard_keywords(),
        }
    }
}
