/// Characters that become words of their own: `( ) * + , - . /` and `; < = > ?`.
///
/// `:` sits between the two ranges and is not included: `a::int` stays one word.
pub fn is_split_char(c: char) -> bool {
    matches!(c, '\u{28}'..='\u{2f}' | '\u{3b}'..='\u{3f}')
}

/// Split raw SQL text into the ordered word sequence consumed by the tokenizer.
///
/// Behavior:
/// - Newlines, tabs and the full-width space (U+3000) count as ordinary spaces.
/// - Text is split on spaces; empty fragments are dropped.
/// - Every punctuation character (see `is_split_char`) becomes its own word;
///   runs of other characters between them stay together.
///
/// Never fails; empty or all-whitespace input yields an empty `Vec`.
pub fn split(text: &str) -> Vec<String> {
    let normalized = text.replace(['\n', '\t', '\u{3000}'], " ");
    let mut words = Vec::new();

    for fragment in normalized.split(' ').filter(|f| !f.is_empty()) {
        if fragment.chars().any(is_split_char) {
            decompose(fragment, &mut words);
        } else {
            words.push(fragment.to_string());
        }
    }

    words
}

fn decompose(fragment: &str, out: &mut Vec<String>) {
    let mut current = String::new();
    for c in fragment.chars() {
        if is_split_char(c) {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            out.push(c.to_string());
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", &[])]
    #[case("   \n\t\u{3000} ", &[])]
    #[case("SELECT a FROM t", &["SELECT", "a", "FROM", "t"])]
    #[case("SELECT\ta\nFROM\u{3000}t", &["SELECT", "a", "FROM", "t"])]
    #[case("a.b.c", &["a", ".", "b", ".", "c"])]
    #[case("COUNT(x)", &["COUNT", "(", "x", ")"])]
    #[case("f((a,b))", &["f", "(", "(", "a", ",", "b", ")", ")"])]
    #[case("a>=b;", &["a", ">", "=", "b", ";"])]
    #[case("x::int", &["x::int"])]
    #[case("a:b=c", &["a:b", "=", "c"])]
    #[case("-1", &["-", "1"])]
    #[case("t.*", &["t", ".", "*"])]
    #[case("'it''s'", &["'it''s'"])]
    #[case("名前.列", &["名前", ".", "列"])]
    fn splits_words(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(split(text), expected);
    }

    #[test]
    fn carriage_return_is_not_whitespace() {
        assert_eq!(split("a\r\nb"), vec!["a\r", "b"]);
    }

    #[rstest]
    #[case('(', true)]
    #[case('/', true)]
    #[case(';', true)]
    #[case('?', true)]
    #[case(':', false)]
    #[case('@', false)]
    #[case('\'', false)]
    #[case('0', false)]
    fn split_chars(#[case] c: char, #[case] expected: bool) {
        assert_eq!(is_split_char(c), expected);
    }
}
