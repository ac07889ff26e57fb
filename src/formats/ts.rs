//! TS markup parsing
//!
//! Qt Linguist translation files: a root element carrying a `language`
//! attribute and `message` elements with `source` and `translation` children.

use roxmltree::{Document, Node};

use super::{Entry, TranslationDocument};

pub fn parse(content: &str) -> Result<TranslationDocument, roxmltree::Error> {
    let doc = Document::parse(content)?;
    let root = doc.root_element();
    let language = root.attribute("language").unwrap_or("").to_string();

    let mut entries = Vec::new();
    for message in root.descendants().filter(|n| n.has_tag_name("message")) {
        let Some(source) = child_text(&message, "source") else {
            continue;
        };
        let Some(target) = child_text(&message, "translation") else {
            continue;
        };
        if source.is_empty() || target.is_empty() {
            continue;
        }
        entries.push(Entry { source, target });
    }

    Ok(TranslationDocument { language, entries })
}

/// Trimmed text of the first child element with the given name, or None when
/// the child is absent. A present but textless child yields an empty string.
fn child_text(node: &Node, name: &str) -> Option<String> {
    node.children()
        .find(|c| c.has_tag_name(name))
        .map(|el| el.text().unwrap_or("").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_messages() {
        let content = r#"<?xml version="1.0" encoding="utf-8"?>
<TS version="2.1" language="sv">
  <context>
    <name>MainWindow</name>
    <message>
      <source>Open File</source>
      <translation>Öppna fil</translation>
    </message>
    <message>
      <source>Save</source>
      <translation>Spara</translation>
    </message>
  </context>
</TS>
"#;
        let doc = parse(content).unwrap();
        assert_eq!(doc.language, "sv");
        assert_eq!(doc.entries.len(), 2);
        assert_eq!(doc.entries[0].source, "Open File");
        assert_eq!(doc.entries[0].target, "Öppna fil");
    }

    #[test]
    fn test_missing_language_attribute() {
        let content = r#"<TS><message><source>a</source><translation>b</translation></message></TS>"#;
        let doc = parse(content).unwrap();
        assert_eq!(doc.language, "");
        assert_eq!(doc.entries.len(), 1);
    }

    #[test]
    fn test_skips_incomplete_messages() {
        let content = r#"<TS language="de">
  <message><source>No translation child</source></message>
  <message><source>Untranslated</source><translation></translation></message>
  <message><source>  </source><translation>whitespace source</translation></message>
  <message><source>Kept</source><translation>Behalten</translation></message>
</TS>"#;
        let doc = parse(content).unwrap();
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(doc.entries[0].source, "Kept");
    }

    #[test]
    fn test_text_is_trimmed() {
        let content = r#"<TS><message>
  <source>
    Open
  </source>
  <translation>
    Öppna
  </translation>
</message></TS>"#;
        let doc = parse(content).unwrap();
        assert_eq!(doc.entries[0].source, "Open");
        assert_eq!(doc.entries[0].target, "Öppna");
    }

    #[test]
    fn test_malformed_markup_is_an_error() {
        assert!(parse("<TS><message></TS>").is_err());
    }
}
