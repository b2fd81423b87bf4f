//! Category tags for the cells produced by the structural tokenizer.
//!
//! The set is closed: every word the splitter emits is classified into one of
//! these variants by `KeywordSet::classify`, and the group variants
//! (`OpenBracket`, `CombinationIdentifier`) are only ever assigned by the
//! marking routines in `tokenizer.rs`.
//!
//! `Display` yields the canonical name that is also used as the key when a
//! cell is serialized.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CellType {
    /// `AS` keyword inside an identifier combination (`price AS p`).
    #[display("AS")]
    As,
    #[display("Dot")]
    Dot,
    #[display("Comma")]
    Comma,
    #[display("Equals")]
    Equals,
    /// One of `+ - * /`.
    #[display("Operator")]
    Operator,
    /// A single or multi-word entry of the keyword set.
    #[display("Key Word")]
    KeyWord,
    #[display("Identifier")]
    Identifier,
    #[display("Open Bracket")]
    OpenBracket,
    #[display("Close Bracket")]
    CloseBracket,
    /// Reserved category; the tokenizer folds multi-word keywords into `KeyWord`.
    #[display("Complex keyword")]
    ComplexKeyword,
    /// Several cells forming one logical expression (alias, function call, ...).
    #[display("Combination Identifier")]
    CombinationIdentifier,
}

impl CellType {
    /// Classify a word that is exactly one punctuation literal.
    ///
    /// Returns `None` for anything else; keyword lookup is the caller's job.
    pub fn from_punctuation(word: &str) -> Option<Self> {
        let kind = match word {
            "(" => CellType::OpenBracket,
            ")" => CellType::CloseBracket,
            "." => CellType::Dot,
            "," => CellType::Comma,
            "=" => CellType::Equals,
            "+" | "-" | "*" | "/" => CellType::Operator,
            _ => return None,
        };
        Some(kind)
    }

    /// Key under which a cell of this type is serialized.
    pub const fn serial_name(self) -> &'static str {
        match self {
            CellType::As => "AS",
            CellType::Dot => "Dot",
            CellType::Comma => "Comma",
            CellType::Equals => "Equals",
            CellType::Operator => "Operator",
            CellType::KeyWord => "Key Word",
            CellType::Identifier => "Identifier",
            CellType::OpenBracket => "Bracket",
            CellType::CloseBracket => "Close Bracket",
            CellType::ComplexKeyword => "Complex keyword",
            CellType::CombinationIdentifier => "Combination Identifier",
        }
    }
}
