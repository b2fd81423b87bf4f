use crate::*;

/// Deepest bracket nesting a single tokenize call accepts.
///
/// Bracket groups are built, serialized and dropped recursively, so stack use
/// grows with nesting depth.
pub const MAX_BRACKET_DEPTH: usize = 128;

/// Forward-only cursor over the words of one tokenize call.
///
/// Owns nothing: it borrows the split words and the keyword set, and only
/// tracks the read position and the number of open brackets. The position
/// never decreases.
#[derive(Debug, Clone)]
pub struct WordStream<'a> {
    words: &'a [String],
    keywords: &'a KeywordSet,
    position: usize,
    depth: usize,
}

impl<'a> WordStream<'a> {
    pub fn new(words: &'a [String], keywords: &'a KeywordSet) -> Self {
        Self {
            words,
            keywords,
            position: 0,
            depth: 0,
        }
    }

    pub fn keywords(&self) -> &'a KeywordSet {
        self.keywords
    }

    /// Number of words consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Brackets currently open.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Record an opening bracket at the cursor; fails past `MAX_BRACKET_DEPTH`.
    pub fn enter_bracket(&mut self) -> Result {
        if self.depth >= MAX_BRACKET_DEPTH {
            return Err(Error::NestingTooDeep {
                position: self.position,
                limit: MAX_BRACKET_DEPTH,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave_bracket(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.words.len()
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.words.get(self.position).map(String::as_str)
    }

    /// Classification of the word under the cursor.
    pub fn peek_kind(&self) -> Option<CellType> {
        self.peek_classified().map(|(_, kind)| kind)
    }

    pub fn peek_classified(&self) -> Option<(&'a str, CellType)> {
        self.peek().map(|w| (w, self.keywords.classify(w)))
    }

    /// Consume the current word.
    pub fn advance(&mut self) -> Option<&'a str> {
        let word = self.peek()?;
        self.position += 1;
        Some(word)
    }
}
