//! PO catalog parsing
//!
//! A deliberately small line scanner instead of a multi-line regex: it walks
//! the file once, pairing each `msgid "..."` literal with the next
//! `msgstr "..."` literal on a later line, allowing comment and flag lines in
//! between. Only the escape sequences `\n` and `\"` are interpreted; anything
//! else is left as written.

use std::sync::LazyLock;

use regex::Regex;

use super::{Entry, TranslationDocument};

static LANGUAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Language:\s*(\S+)").unwrap());

pub fn parse(content: &str) -> TranslationDocument {
    TranslationDocument {
        language: detect_language(content),
        entries: scan_entries(content),
    }
}

/// The `Language:` header field, or an empty string when absent. An absent
/// header means the document accepts terms of any language.
fn detect_language(content: &str) -> String {
    LANGUAGE_RE
        .captures(content)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

fn scan_entries(content: &str) -> Vec<Entry> {
    let lines: Vec<&str> = content.lines().collect();
    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some((msgid, end)) = keyword_literal(lines[i], "msgid") else {
            i += 1;
            continue;
        };
        // An entry only starts where nothing but whitespace follows the
        // msgid literal.
        if !lines[i][end..].trim().is_empty() {
            i += 1;
            continue;
        }

        // Find the msgstr literal on a later line, skipping whatever sits in
        // between (comments, flags, msgctxt). The msgstr keyword counts only
        // at column 0; a quoted msgstr inside a comment line is skipped over.
        let mut j = i + 1;
        let msgstr = loop {
            if j >= lines.len() {
                return entries;
            }
            if let Some((literal, _)) = leading_keyword_literal(lines[j], "msgstr") {
                break literal;
            }
            j += 1;
        };

        // Entries with an empty side carry nothing to compare.
        if !msgid.is_empty() && !msgstr.is_empty() {
            entries.push(Entry {
                source: unescape(&msgid),
                target: unescape(&msgstr),
            });
        }
        i = j + 1;
    }

    entries
}

/// Locate `keyword` anywhere in the line followed by whitespace and a
/// double-quoted literal. Returns the raw literal (escapes intact) and the
/// byte offset just past the closing quote.
fn keyword_literal(line: &str, keyword: &str) -> Option<(String, usize)> {
    let mut from = 0;
    while let Some(pos) = line[from..].find(keyword) {
        let at = from + pos;
        if let Some((raw, len)) = literal_after(&line[at + keyword.len()..]) {
            return Some((raw, at + keyword.len() + len));
        }
        from = at + keyword.len();
    }
    None
}

/// Like `keyword_literal`, but the keyword must start the line. Used for the
/// msgstr side, which never matches mid-line.
fn leading_keyword_literal(line: &str, keyword: &str) -> Option<(String, usize)> {
    if !line.starts_with(keyword) {
        return None;
    }
    literal_after(&line[keyword.len()..]).map(|(raw, len)| (raw, keyword.len() + len))
}

/// Whitespace then a quoted literal. Returns the raw body and the byte count
/// consumed, measured from the start of `rest`.
fn literal_after(rest: &str) -> Option<(String, usize)> {
    let trimmed = rest.trim_start();
    let ws = rest.len() - trimmed.len();
    if ws == 0 || !trimmed.starts_with('"') {
        return None;
    }
    let (raw, body_len) = scan_literal(&trimmed[1..])?;
    Some((raw, ws + 1 + body_len + 1))
}

/// Scan an escaped string body up to the first unescaped quote. Escape pairs
/// are kept verbatim; `unescape` interprets them later. Returns the body and
/// its byte length, or None when the literal is unterminated.
fn scan_literal(s: &str) -> Option<(String, usize)> {
    let mut out = String::new();
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some((out, i)),
            '\\' => {
                let (_, escaped) = chars.next()?;
                out.push('\\');
                out.push(escaped);
            }
            _ => out.push(c),
        }
    }
    None
}

/// Interpret the PO escape set: `\n` and `\"` only, in that order.
fn unescape(raw: &str) -> String {
    raw.replace("\\n", "\n").replace("\\\"", "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_entries() {
        let content = r#"
msgid "Open File"
msgstr "Öppna fil"

msgid "Save"
msgstr "Spara"
"#;
        let doc = parse(content);
        assert_eq!(doc.entries.len(), 2);
        assert_eq!(doc.entries[0].source, "Open File");
        assert_eq!(doc.entries[0].target, "Öppna fil");
        assert_eq!(doc.entries[1].source, "Save");
        assert_eq!(doc.entries[1].target, "Spara");
    }

    #[test]
    fn test_detect_language_header() {
        let content = "# Swedish translation\nLanguage: sv\n\nmsgid \"a\"\nmsgstr \"b\"\n";
        assert_eq!(parse(content).language, "sv");
    }

    #[test]
    fn test_no_language_header_means_empty() {
        let content = "msgid \"a\"\nmsgstr \"b\"\n";
        assert_eq!(parse(content).language, "");
    }

    #[test]
    fn test_intervening_comment_lines() {
        let content = r#"
msgid "Quit"
#, fuzzy
#: src/window.c:42
msgstr "Avsluta"
"#;
        let doc = parse(content);
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(doc.entries[0].target, "Avsluta");
    }

    #[test]
    fn test_escape_sequences() {
        let content = r#"
msgid "Line one\nLine \"two\""
msgstr "Rad ett\nRad \"två\""
"#;
        let doc = parse(content);
        assert_eq!(doc.entries[0].source, "Line one\nLine \"two\"");
        assert_eq!(doc.entries[0].target, "Rad ett\nRad \"två\"");
    }

    #[test]
    fn test_other_escapes_left_verbatim() {
        let content = "msgid \"a\\tb\"\nmsgstr \"c\\td\"\n";
        let doc = parse(content);
        assert_eq!(doc.entries[0].source, "a\\tb");
    }

    #[test]
    fn test_skips_empty_sides() {
        let content = r#"
msgid ""
msgstr "Header entry, skipped"

msgid "Untranslated"
msgstr ""

msgid "Kept"
msgstr "Behålls"
"#;
        let doc = parse(content);
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(doc.entries[0].source, "Kept");
    }

    #[test]
    fn test_msgid_with_trailing_junk_is_not_an_entry() {
        let content = "msgid \"a\" trailing\nmsgstr \"b\"\n";
        assert!(parse(content).entries.is_empty());
    }

    #[test]
    fn test_quoted_msgstr_in_comment_line_not_paired() {
        // A comment quoting a msgstr must not terminate the entry; only a
        // msgstr at the start of a line does.
        let content = "msgid \"Open File\"\n# note: old msgstr \"wrong\"\nmsgstr \"Fil\"\n";
        let doc = parse(content);
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(doc.entries[0].target, "Fil");
    }

    #[test]
    fn test_indented_msgstr_is_skipped() {
        let content = "msgid \"a\"\n  msgstr \"indented\"\nmsgstr \"b\"\n";
        let doc = parse(content);
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(doc.entries[0].target, "b");
    }

    #[test]
    fn test_unterminated_literal_ignored() {
        let content = "msgid \"broken\nmsgstr \"ok\"\nmsgid \"x\"\nmsgstr \"y\"\n";
        let doc = parse(content);
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(doc.entries[0].source, "x");
    }
}
