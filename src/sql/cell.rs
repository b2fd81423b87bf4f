//! Cell tree produced by the structural tokenizer.
//!
//! A `Cell` is either a leaf holding the word text it was built from, or a
//! group owning an ordered list of child cells. Only two kinds of groups
//! exist:
//! - brackets (`CellType::OpenBracket`), built through `BracketBuilder`;
//! - identifier combinations (`CellType::CombinationIdentifier`), built
//!   through `Cell::combination` and always holding more than one child.
//!
//! Cells are immutable once built. The tree is strictly owned top-down; a cell
//! never points back at its parent.
//!
//! Serialization (serde) renders every cell as a single-key map from its
//! serial name to either the leaf text or the list of serialized children:
//! `{"Combination Identifier": [{"Identifier": "COUNT"}, {"Bracket": [{"Identifier": "x"}]}]}`.
//! An empty bracket renders as `{"Bracket": "()"}`.

use crate::*;
use itertools::Itertools as _;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Serialized content of a bracket without children.
pub const EMPTY_BRACKET: &str = "()";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Leaf { kind: CellType, text: String },
    Group { kind: CellType, children: Vec<Cell> },
}

impl Cell {
    pub fn leaf(kind: CellType, text: impl Into<String>) -> Self {
        Cell::Leaf {
            kind,
            text: text.into(),
        }
    }

    /// Combine cells into one logical expression.
    ///
    /// A single cell is returned unchanged and an empty list yields `None`, so
    /// a `CombinationIdentifier` always has at least two children.
    pub fn combination(mut children: Vec<Cell>) -> Option<Self> {
        match children.len() {
            0 => None,
            1 => children.pop(),
            _ => Some(Cell::Group {
                kind: CellType::CombinationIdentifier,
                children,
            }),
        }
    }

    pub fn kind(&self) -> CellType {
        match self {
            Cell::Leaf { kind, .. } | Cell::Group { kind, .. } => *kind,
        }
    }

    /// Leaf text, `None` for groups.
    #[cfg(test)]
    pub fn text(&self) -> Option<&str> {
        match self {
            Cell::Leaf { text, .. } => Some(text.as_str()),
            Cell::Group { .. } => None,
        }
    }

    /// Child cells; empty for leaves.
    pub fn children(&self) -> &[Cell] {
        match self {
            Cell::Leaf { .. } => &[],
            Cell::Group { children, .. } => children.as_slice(),
        }
    }

    pub fn is_bracket(&self) -> bool {
        self.kind() == CellType::OpenBracket
    }

    /// Maximum bracket nesting depth within this cell (a leaf is 0, `(x)` is 1).
    pub fn depth(&self) -> usize {
        let inner = self.children().iter().map(Cell::depth).max().unwrap_or(0);
        if self.is_bracket() { inner + 1 } else { inner }
    }
}

/// Reconstructs space-separated source text, e.g. `COUNT (x)` or `price AS p`.
impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Leaf { text, .. } => f.write_str(text),
            Cell::Group {
                kind: CellType::OpenBracket,
                children,
            } => write!(f, "({})", children.iter().join(" ")),
            Cell::Group { children, .. } => write!(f, "{}", children.iter().join(" ")),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        let key = self.kind().serial_name();
        match self {
            Cell::Leaf { text, .. } => map.serialize_entry(key, text)?,
            Cell::Group { children, .. } if children.is_empty() => {
                map.serialize_entry(key, EMPTY_BRACKET)?
            }
            Cell::Group { children, .. } => map.serialize_entry(key, children)?,
        }
        map.end()
    }
}

/// Append-only accumulator for the children of a bracket group.
///
/// The tokenizer inserts children while it descends and freezes the builder
/// into an immutable `Cell` once the closing bracket is consumed.
#[derive(Debug, Default)]
pub struct BracketBuilder {
    children: Vec<Cell>,
}

impl BracketBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, cell: Cell) {
        self.children.push(cell);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Freeze into an `OpenBracket` group.
    pub fn finish(self) -> Cell {
        Cell::Group {
            kind: CellType::OpenBracket,
            children: self.children,
        }
    }
}

impl Extend<Cell> for BracketBuilder {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.children.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ident(text: &str) -> Cell {
        Cell::leaf(CellType::Identifier, text)
    }

    fn bracket(children: Vec<Cell>) -> Cell {
        let mut builder = BracketBuilder::new();
        builder.extend(children);
        builder.finish()
    }

    #[test]
    fn combination_of_one_is_the_cell_itself() {
        assert_eq!(Cell::combination(vec![ident("a")]), Some(ident("a")));
        assert_eq!(Cell::combination(vec![]), None);
    }

    #[test]
    fn combination_of_many_is_a_group() {
        let cell = Cell::combination(vec![ident("a"), Cell::leaf(CellType::Operator, "+")])
            .expect("two children");
        assert_eq!(cell.kind(), CellType::CombinationIdentifier);
        assert_eq!(cell.children().len(), 2);
        assert_eq!(cell.text(), None);
    }

    #[test]
    fn leaf_accessors() {
        let cell = Cell::leaf(CellType::KeyWord, "GROUP BY");
        assert_eq!(cell.kind(), CellType::KeyWord);
        assert_eq!(cell.text(), Some("GROUP BY"));
        assert!(cell.children().is_empty());
        assert_eq!(cell.depth(), 0);
    }

    #[test]
    fn builder_preserves_insert_order() {
        let mut builder = BracketBuilder::new();
        assert_eq!(builder.len(), 0);
        builder.insert(ident("x"));
        builder.insert(Cell::leaf(CellType::Comma, ","));
        builder.insert(ident("y"));
        assert_eq!(builder.len(), 3);

        let cell = builder.finish();
        assert!(cell.is_bracket());
        assert_eq!(
            cell.children(),
            [ident("x"), Cell::leaf(CellType::Comma, ","), ident("y")]
        );
        assert_eq!(cell.to_string(), "(x , y)");
    }

    #[test]
    fn depth_counts_brackets_through_combinations() {
        let inner = bracket(vec![ident("x")]);
        let call = Cell::combination(vec![ident("f"), inner]).expect("two children");
        assert_eq!(call.depth(), 1);
        assert_eq!(bracket(vec![call]).depth(), 2);
        assert_eq!(bracket(vec![]).depth(), 1);
    }

    #[test]
    fn display_reconstructs_text() {
        let call = Cell::combination(vec![ident("COUNT"), bracket(vec![ident("x")])])
            .expect("two children");
        assert_eq!(call.to_string(), "COUNT (x)");
        assert_eq!(bracket(vec![]).to_string(), "()");
    }

    #[test]
    fn serializes_leaf_as_single_key_map() {
        let value = serde_json::to_value(Cell::leaf(CellType::KeyWord, "SELECT")).unwrap();
        assert_eq!(value, json!({"Key Word": "SELECT"}));
    }

    #[test]
    fn serializes_groups_recursively() {
        let call = Cell::combination(vec![ident("COUNT"), bracket(vec![ident("x")])])
            .expect("two children");
        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(
            value,
            json!({"Combination Identifier": [
                {"Identifier": "COUNT"},
                {"Bracket": [{"Identifier": "x"}]},
            ]})
        );
    }

    #[test]
    fn serializes_empty_bracket_as_parens() {
        let value = serde_json::to_value(bracket(vec![])).unwrap();
        assert_eq!(value, json!({"Bracket": "()"}));
    }
}
