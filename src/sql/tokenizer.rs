use crate::*;

/// Structural SQL tokenizer producing a tree of typed `Cell`s.
///
/// Scope / Intent:
/// - Groups words lexically, without validating statement structure:
///   dotted paths (`schema.table.column`), multi-word keywords (`GROUP BY`),
///   parenthesized groups and identifier combinations (`price AS p`, `COUNT(x)`).
/// - Keywords come from the supplied `KeywordSet`; everything that is neither a
///   keyword nor a known punctuation literal is an identifier.
///
/// Behavior:
/// - Splits `text` into words (see `splitter::split`) and walks them once with a
///   forward-only `WordStream`.
/// - Dispatches on the classification of the current word: identifiers,
///   keywords and open brackets start a marking routine, any other word becomes
///   a leaf cell on its own.
///
/// Errors:
/// - `Error::UnmatchedCloseBracket` for a `)` outside any bracket, with the word
///   index it was found at.
/// - `Error::UnterminatedBracket` when input ends inside a bracket, with the word
///   index of the opening `(`.
/// - `Error::NestingTooDeep` when a `(` would open more than
///   `MAX_BRACKET_DEPTH` brackets, with the word index of that `(`.
///
/// No partial tree is returned on failure.
///
/// Complexity:
/// - O(n) in the number of words for everything but keyword matching.
/// - Each keyword extension step re-joins and upper-cases the whole candidate,
///   so a keyword spanning k words costs O(k²) in its length.
/// - Recursion depth is bounded by `MAX_BRACKET_DEPTH`.
pub fn tokenize(keywords: &KeywordSet, text: &str) -> Result<Vec<Cell>> {
    let words = split(text);
    debug!(words = words.len(), keywords = keywords.len(), "Tokenizing");

    let mut stream = WordStream::new(&words, keywords);
    let cells = mark(&mut stream).inspect_err(|err| warn!("Tokenizing failed: {err}"))?;
    debug_assert!(stream.is_at_end() && stream.depth() == 0);
    Ok(cells)
}

fn mark(stream: &mut WordStream<'_>) -> Result<Vec<Cell>> {
    let mut cells = Vec::new();
    while let Some(kind) = stream.peek_kind() {
        match kind {
            CellType::Identifier => cells.extend(mark_identifier(stream)?),
            CellType::KeyWord => cells.extend(mark_keyword(stream)),
            CellType::OpenBracket => cells.push(mark_bracket(stream)?),
            CellType::CloseBracket => {
                return Err(Error::UnmatchedCloseBracket {
                    position: stream.position(),
                });
            }
            _ => cells.extend(mark_single(stream, kind)),
        }
    }
    Ok(cells)
}

/// Consume one word as a leaf of the given type.
fn mark_single(stream: &mut WordStream<'_>, kind: CellType) -> Option<Cell> {
    stream.advance().map(|word| Cell::leaf(kind, word))
}

/// Greedily extend the keyword under the cursor with the following words.
///
/// Each step looks up the whole space-joined candidate, and stops at
/// the first candidate that is not itself a keyword. With `ORDER` and
/// `ORDER BY DESC` but no `ORDER BY`, `ORDER BY DESC` is never reached.
#[tracing::instrument(level = "trace", skip_all, fields(position = stream.position()))]
fn mark_keyword(stream: &mut WordStream<'_>) -> Option<Cell> {
    let mut full_name = stream.advance()?.to_string();

    while let Some(next) = stream.peek() {
        let candidate = format!("{full_name} {next}");
        if !stream.keywords().contains(&candidate) {
            break;
        }
        full_name = candidate;
        stream.advance();
    }

    Some(Cell::leaf(CellType::KeyWord, full_name))
}

/// Join an `Identifier (Dot Identifier)*` run into one identifier (`a.b.c`).
///
/// A trailing dot is kept (`t.` before `*` yields `t.`).
#[tracing::instrument(level = "trace", skip_all, fields(position = stream.position()))]
fn mark_identifier_dot(stream: &mut WordStream<'_>) -> Option<Cell> {
    let mut full_name = String::new();
    let mut expect_identifier = true;

    while let Some((word, kind)) = stream.peek_classified() {
        match (kind, expect_identifier) {
            (CellType::Identifier, true) | (CellType::Dot, false) => {
                full_name.push_str(word);
                expect_identifier = !expect_identifier;
                stream.advance();
            }
            _ => break,
        }
    }

    (!full_name.is_empty()).then(|| Cell::leaf(CellType::Identifier, full_name))
}

/// Collect a dotted identifier and the modifiers that follow it.
///
/// Takes further identifiers, bracket groups (function calls), `=` and
/// operators, and `AS`. A comma is taken and ends the entry; any other keyword
/// or word is left for the caller. More than one collected cell is wrapped in
/// a `CombinationIdentifier`.
#[tracing::instrument(level = "trace", skip_all, fields(position = stream.position()))]
fn mark_identifier(stream: &mut WordStream<'_>) -> Result<Option<Cell>> {
    let mut cells = Vec::new();

    while let Some((word, kind)) = stream.peek_classified() {
        match kind {
            CellType::Identifier => cells.extend(mark_identifier_dot(stream)),
            CellType::OpenBracket => cells.push(mark_bracket(stream)?),
            CellType::Equals | CellType::Operator => cells.extend(mark_single(stream, kind)),
            CellType::KeyWord if word.eq_ignore_ascii_case("AS") => {
                cells.extend(mark_single(stream, CellType::As))
            }
            CellType::Comma => {
                cells.extend(mark_single(stream, kind));
                break;
            }
            _ => break,
        }
    }

    Ok(Cell::combination(cells))
}

/// Collect everything up to the matching `)` into a bracket group.
///
/// The cursor must be on `(`. Nested brackets recurse, up to
/// `MAX_BRACKET_DEPTH` open at once; identifiers and keywords go through their
/// marking routines; anything else is a leaf.
#[tracing::instrument(level = "trace", skip_all, fields(position = stream.position()))]
fn mark_bracket(stream: &mut WordStream<'_>) -> Result<Cell> {
    debug_assert_eq!(stream.peek_kind(), Some(CellType::OpenBracket));
    let open = stream.position();
    stream.enter_bracket()?;
    stream.advance();

    let mut bracket = BracketBuilder::new();
    while let Some(kind) = stream.peek_kind() {
        match kind {
            CellType::CloseBracket => {
                stream.advance();
                stream.leave_bracket();
                trace!(open, children = bracket.len(), "Closed bracket");
                return Ok(bracket.finish());
            }
            CellType::Identifier => bracket.extend(mark_identifier(stream)?),
            CellType::OpenBracket => bracket.insert(mark_bracket(stream)?),
            CellType::KeyWord => bracket.extend(mark_keyword(stream)),
            _ => bracket.extend(mark_single(stream, kind)),
        }
    }

    Err(Error::UnterminatedBracket { position: open })
}
