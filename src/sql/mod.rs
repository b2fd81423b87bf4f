//! Structural SQL tokenization.
//!
//! Turns raw SQL-like text into a nested sequence of typed cells without
//! building a full grammar: it classifies words and groups them structurally
//! (dotted identifiers, multi-word keywords, bracket groups, simple identifier
//! combinations such as `expr AS alias`). The result feeds downstream analysis
//! such as rewriting, linting or dependency extraction.
//!
//! Modules:
//! - `splitter`  : Whitespace normalization and punctuation-aware word splitting.
//! - `cell_type` : Closed set of cell categories and their canonical names.
//! - `keyword`   : Runtime keyword set and word classification.
//! - `cell`      : The `Cell` tree, the bracket builder, and serialization.
//! - `stream`    : Forward-only word cursor shared by the marking routines.
//! - `tokenizer` : Recursive descent producing `Vec<Cell>` from raw SQL.
//!
//! Pipeline: text → `split` → words → `tokenize` (cursor-based recursive
//! descent) → top-level cells, each possibly owning nested cells.
//!
//! A tokenize call is self-contained: it borrows an immutable `KeywordSet`,
//! keeps its cursor on the stack and performs no I/O, so independent calls can
//! run on separate threads.
//!
//! NOTE: This does not validate SQL. The only failures are bracket structure
//! errors (see `tokenizer::tokenize`).

pub mod cell;
pub mod cell_type;
pub mod keyword;
pub mod splitter;
pub mod stream;
pub mod tokenizer;

pub use cell::{BracketBuilder, Cell};
pub use cell_type::CellType;
pub use keyword::{KeywordDictionary, KeywordSet};
pub use splitter::split;
pub use stream::{MAX_BRACKET_DEPTH, WordStream};
pub use tokenizer::tokenize;

/// Convenience prelude re‑exporting the most commonly used items.
pub mod prelude {
    pub use super::{Cell, CellType, KeywordSet, tokenize};
}
