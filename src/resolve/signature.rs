//! Source-level recovery of a caller's declared parameter list.
//!
//! Rust keeps no runtime metadata about function parameters, so the frame
//! inspector re-reads the caller's source text and parses the signature of
//! the function enclosing the call site. Everything in here is best effort:
//! any input the scanner does not understand yields `None`, which the caller
//! turns into a descriptive fallback name.

use std::env;
use std::fs;
use std::path::Path;

/// A declared formal parameter, as written in the caller's signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Param {
    /// The binding name, or the raw pattern text when the parameter is
    /// destructured and has no single name.
    pub name: String,
    /// The declared type text, verbatim apart from trimming.
    pub ty: String,
}

/// Read a source file as reported by a call-site location.
///
/// Locations are usually package-relative, so a second attempt joins the
/// path onto `CARGO_MANIFEST_DIR` when the direct read fails. Deployed
/// binaries without sources simply return `None`.
pub(crate) fn read_source(path: &str) -> Option<String> {
    if let Ok(text) = fs::read_to_string(path) {
        return Some(text);
    }
    let base = env::var("CARGO_MANIFEST_DIR").ok()?;
    fs::read_to_string(Path::new(&base).join(path)).ok()
}

/// Parse the parameter list of the function enclosing `line` (1-based).
///
/// Scans backward from the call line for the nearest `fn` item, then walks
/// the signature with a small depth-counting scanner. `fn` tokens that do
/// not start a named item (pointer types like `fn(i64) -> i64`) are skipped.
/// Receivers (`self` in any form) are skipped. Returns `None` when no
/// signature can be recovered.
pub(crate) fn parameters_of_enclosing_fn(source: &str, line: u32) -> Option<Vec<Param>> {
    let end = offset_of_line_end(source, line)?;
    let region = &source[..end];
    for fn_start in fn_tokens(region).into_iter().rev() {
        if let Some(params_text) = param_list_text(&source[fn_start..]) {
            let mut params = Vec::new();
            for piece in split_top_level(&params_text) {
                if let Some(param) = parse_param(&piece) {
                    params.push(param);
                }
            }
            return Some(params);
        }
    }
    None
}

/// Whether a declared parameter type is a plausible match for the runtime
/// type hint supplied by a rule (a `std::any::type_name` string).
///
/// Both sides are normalized down to bare type names, and an `Option`
/// wrapper on either side is peeled, since nullable guard inputs may be
/// declared either way.
pub(crate) fn type_matches(declared: &str, hint: &str) -> bool {
    let d = normalize(declared);
    let h = normalize(hint);
    d == h || d == format!("Option<{h}>") || h == format!("Option<{d}>")
}

/// Byte offset of the end of the given 1-based line.
fn offset_of_line_end(source: &str, line: u32) -> Option<usize> {
    let mut current = 1u32;
    if line == 0 {
        return None;
    }
    if current == line {
        return Some(source.find('\n').unwrap_or(source.len()));
    }
    for (idx, ch) in source.char_indices() {
        if ch == '\n' {
            current += 1;
            if current == line {
                let rest = &source[idx + 1..];
                let end = rest.find('\n').map(|n| idx + 1 + n).unwrap_or(source.len());
                return Some(end);
            }
        }
    }
    None
}

/// Positions of every `fn` keyword token in the region, in order.
fn fn_tokens(region: &str) -> Vec<usize> {
    let bytes = region.as_bytes();
    let mut found = Vec::new();
    let mut idx = 0;
    while let Some(pos) = region[idx..].find("fn") {
        let at = idx + pos;
        let before_ok = at == 0 || !is_ident_char(bytes[at - 1] as char);
        let after_ok = at + 2 >= bytes.len() || !is_ident_char(bytes[at + 2] as char);
        if before_ok && after_ok {
            found.push(at);
        }
        idx = at + 2;
    }
    found
}

/// Extract the text inside the parameter parentheses of the signature
/// starting at a `fn` keyword. Handles multi-line signatures, generic
/// sections (including `Fn(..) -> ..` bounds), and nested parentheses.
fn param_list_text(from_fn: &str) -> Option<String> {
    let mut chars = from_fn.chars().peekable();
    // consume "fn"
    chars.next();
    chars.next();
    skip_whitespace(&mut chars);
    // fn items are always named; a bare `fn(` here is a pointer type.
    match chars.peek() {
        Some(c) if is_ident_start(*c) => {}
        _ => return None,
    }
    while matches!(chars.peek(), Some(c) if is_ident_char(*c)) {
        chars.next();
    }
    skip_whitespace(&mut chars);
    if chars.peek() == Some(&'<') {
        consume_generics(&mut chars)?;
        skip_whitespace(&mut chars);
    }
    if chars.next() != Some('(') {
        return None;
    }
    let mut depth = 1usize;
    let mut out = String::new();
    for c in chars {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(out);
                }
            }
            _ => {}
        }
        out.push(c);
    }
    None
}

/// Consume a balanced `<...>` generic section, tolerating `->` arrows
/// inside closure-trait bounds.
fn consume_generics(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<()> {
    let mut depth = 0usize;
    let mut prev = ' ';
    for c in chars {
        match c {
            '<' => depth += 1,
            '>' if prev != '-' => {
                depth -= 1;
                if depth == 0 {
                    return Some(());
                }
            }
            _ => {}
        }
        prev = c;
    }
    None
}

/// Split a parameter list on top-level commas, respecting nesting in
/// parentheses, angle brackets, and square brackets.
fn split_top_level(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut paren = 0usize;
    let mut angle = 0usize;
    let mut bracket = 0usize;
    let mut prev = ' ';
    for c in text.chars() {
        match c {
            '(' => paren += 1,
            ')' => paren = paren.saturating_sub(1),
            '[' => bracket += 1,
            ']' => bracket = bracket.saturating_sub(1),
            '<' => angle += 1,
            '>' if prev != '-' => angle = angle.saturating_sub(1),
            ',' if paren == 0 && angle == 0 && bracket == 0 => {
                pieces.push(current.trim().to_string());
                current = String::new();
                prev = c;
                continue;
            }
            _ => {}
        }
        current.push(c);
        prev = c;
    }
    if !current.trim().is_empty() {
        pieces.push(current.trim().to_string());
    }
    pieces
}

/// Parse one `pattern: Type` piece. Returns `None` for receivers and for
/// pieces the scanner does not understand.
fn parse_param(piece: &str) -> Option<Param> {
    let colon = top_level_colon(piece)?;
    let pattern = piece[..colon].trim();
    let ty = piece[colon + 1..].trim();
    if pattern.is_empty() || ty.is_empty() {
        return None;
    }
    // `self: Arc<Self>` style receivers carry a type but are still receivers.
    if pattern == "self" || pattern == "mut self" {
        return None;
    }
    let name = pattern
        .strip_prefix("mut ")
        .or_else(|| pattern.strip_prefix("ref "))
        .unwrap_or(pattern)
        .trim();
    Some(Param {
        name: name.to_string(),
        ty: ty.to_string(),
    })
}

/// Find the single `:` separating pattern from type, ignoring `::` paths.
/// Receivers without a type annotation (`self`, `&mut self`) have no colon
/// and yield `None`.
fn top_level_colon(piece: &str) -> Option<usize> {
    let bytes = piece.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b':' {
            if i + 1 < bytes.len() && bytes[i + 1] == b':' {
                i += 2;
                continue;
            }
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Reduce a type string to a compact, path-free form so that source text
/// (`Option<String>`) and `std::any::type_name` output
/// (`core::option::Option<alloc::string::String>`) compare equal.
fn normalize(ty: &str) -> String {
    let mut out = String::new();
    let mut token = String::new();
    let mut chars = ty.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\'' {
            // drop lifetimes entirely
            while matches!(chars.peek(), Some(n) if is_ident_char(*n)) {
                chars.next();
            }
            continue;
        }
        if is_ident_char(c) || c == ':' {
            token.push(c);
            continue;
        }
        flush_token(&mut token, &mut out);
        if !c.is_whitespace() {
            out.push(c);
        }
    }
    flush_token(&mut token, &mut out);
    out
}

fn flush_token(token: &mut String, out: &mut String) {
    if token.is_empty() {
        return;
    }
    let last = token.rsplit("::").next().unwrap_or(token);
    out.push_str(last);
    token.clear();
}

fn skip_whitespace(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
        chars.next();
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn names(params: &[Param]) -> Vec<&str> {
        params.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_single_parameter() {
        let source = "fn enroll(user_name: Option<String>) -> bool {\n    user_name.is_some()\n}\n";
        let params = parameters_of_enclosing_fn(source, 2).unwrap();
        assert_eq!(names(&params), vec!["user_name"]);
        assert_eq!(params[0].ty, "Option<String>");
    }

    #[test]
    fn test_zero_parameters() {
        let source = "fn tick() {\n    let x = 1;\n}\n";
        let params = parameters_of_enclosing_fn(source, 2).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_multi_line_signature() {
        let source = "fn transfer(\n    amount: i64,\n    memo: Option<String>,\n) -> i64 {\n    amount\n}\n";
        let params = parameters_of_enclosing_fn(source, 5).unwrap();
        assert_eq!(names(&params), vec!["amount", "memo"]);
        assert_eq!(params[1].ty, "Option<String>");
    }

    #[test]
    fn test_receiver_is_skipped() {
        let source = "impl Ledger {\n    fn post(&mut self, entry: String) {\n        let _ = entry;\n    }\n}\n";
        let params = parameters_of_enclosing_fn(source, 3).unwrap();
        assert_eq!(names(&params), vec!["entry"]);
    }

    #[test]
    fn test_generics_with_closure_bound() {
        let source =
            "fn retry<F: Fn(u32) -> bool>(attempts: u32, accept: F) {\n    let _ = (attempts, accept);\n}\n";
        let params = parameters_of_enclosing_fn(source, 2).unwrap();
        assert_eq!(names(&params), vec!["attempts", "accept"]);
        assert_eq!(params[0].ty, "u32");
    }

    #[test]
    fn test_fn_pointer_parameter() {
        let source = "fn dispatch(handler: fn(i64) -> i64, seed: i64) {\n    let _ = handler(seed);\n}\n";
        let params = parameters_of_enclosing_fn(source, 2).unwrap();
        assert_eq!(names(&params), vec!["handler", "seed"]);
    }

    #[test]
    fn test_mut_pattern_binding() {
        let source = "fn drain(mut queue: Vec<u8>) {\n    queue.clear();\n}\n";
        let params = parameters_of_enclosing_fn(source, 2).unwrap();
        assert_eq!(names(&params), vec!["queue"]);
    }

    #[test]
    fn test_nearest_fn_wins() {
        let source = "fn outer(a: u8) {}\n\nfn inner(b: u8) {\n    let _ = b;\n}\n";
        let params = parameters_of_enclosing_fn(source, 4).unwrap();
        assert_eq!(names(&params), vec!["b"]);
    }

    #[test]
    fn test_no_fn_in_region() {
        assert!(parameters_of_enclosing_fn("let x = 1;\n", 1).is_none());
    }

    #[test]
    fn test_type_matching_peels_option_and_paths() {
        assert!(type_matches("Option<String>", "core::option::Option<alloc::string::String>"));
        assert!(type_matches("String", "core::option::Option<alloc::string::String>"));
        assert!(type_matches("Option<String>", "alloc::string::String"));
        assert!(type_matches("&str", "&str"));
        assert!(type_matches("std::string::String", "alloc::string::String"));
        assert!(!type_matches("Option<i64>", "alloc::string::String"));
        assert!(!type_matches("u32", "i64"));
    }

    #[test]
    fn test_type_matching_ignores_lifetimes() {
        assert!(type_matches("&'a str", "&str"));
        assert!(type_matches("&'static str", "&str"));
    }

    #[test]
    fn test_read_source_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fn sample(flag: bool) {{}}").unwrap();
        let path = file.path().to_string_lossy().to_string();
        let text = read_source(&path).unwrap();
        assert!(text.contains("fn sample"));
    }

    #[test]
    fn test_read_source_missing_file() {
        assert!(read_source("no/such/file.rs").is_none());
    }
}
