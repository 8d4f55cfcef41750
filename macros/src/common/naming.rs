//! Identifier case conversions shared by the generators.

/// `PartialEq` -> `PARTIAL_EQ`
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_ascii_uppercase()
}

/// `PairI32String` -> `pair_i32_string`, `HTTPHeader` -> `http_header`.
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                None | Some('_') => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                Some(_) => false,
            };
            if boundary {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Tokenized source text with the spaces `to_string` puts around
/// punctuation removed: `Pair < i32 , Box < dyn Any > >` ->
/// `Pair<i32,Box<dyn Any>>`.
pub fn compact_tokens(text: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_' || c == '\'';
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let prev = out.chars().last();
            let next = chars.get(i + 1).copied();
            let between_words = prev.is_some_and(is_word) && next.is_some_and(is_word);
            if !between_words {
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Strict and reserved keywords of the 2024 edition.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers either.
const NOT_RAW: &[&str] = &["crate", "self", "Self", "super"];

pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}

/// Whether `r#s` is a valid identifier.
pub fn can_be_raw(s: &str) -> bool {
    !NOT_RAW.contains(&s)
}

/// Predicate query name to its method: `HasEq` -> `has_eq`,
/// `Hashable` -> `is_hashable`.
pub fn query_method(name: &str) -> String {
    let snake = to_snake_case(name);
    if snake.starts_with("has_") {
        snake
    } else {
        format!("is_{snake}")
    }
}
