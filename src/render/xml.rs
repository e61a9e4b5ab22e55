//! XML adapter.
//!
//! The map becomes a `<map>` root with one child element per key. Arrays
//! repeat the element once per item and objects nest. Keys are used as
//! element names without rewriting.

use serde_json::Value;

use crate::meta::Meta;

const ROOT: &str = "map";

pub fn to_xml(meta: &Meta) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(ROOT);
    out.push('>');
    for (key, value) in meta.iter() {
        write_element(&mut out, key, value);
    }
    out.push_str("</");
    out.push_str(ROOT);
    out.push('>');
    out
}

fn write_element(out: &mut String, name: &str, value: &Value) {
    if let Value::Array(items) = value {
        for item in items {
            write_element(out, name, item);
        }
        return;
    }

    out.push('<');
    out.push_str(name);
    out.push('>');
    match value {
        Value::Null => {}
        Value::String(s) => escape_into(out, s),
        Value::Object(map) => {
            for (key, child) in map {
                write_element(out, key, child);
            }
        }
        other => out.push_str(&other.to_string()),
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Escape markup characters. Characters XML 1.0 cannot carry at all
/// (C0 controls other than tab/LF/CR, U+FFFE, U+FFFF) become U+FFFD.
fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if is_xml_char(c) => out.push(c),
            _ => out.push(char::REPLACEMENT_CHARACTER),
        }
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_arrays_repeat_elements() {
        let meta = Meta::new()
            .with("message", "name and age are required.")
            .with("fields", vec!["name", "age"]);
        assert_eq!(
            to_xml(&meta),
            "<map><message>name and age are required.</message>\
             <fields>name</fields><fields>age</fields></map>"
        );
    }

    #[test]
    fn test_escapes_text() {
        let meta = Meta::new().with("note", "a < b & \"c\"");
        assert_eq!(to_xml(&meta), "<map><note>a &lt; b &amp; &quot;c&quot;</note></map>");
    }

    #[test]
    fn test_replaces_forbidden_characters() {
        let meta = Meta::new().with("note", "a\u{0}b\u{1b}c\u{FFFF}\td\ne");
        assert_eq!(
            to_xml(&meta),
            "<map><note>a\u{FFFD}b\u{FFFD}c\u{FFFD}\td\ne</note></map>"
        );
    }

    #[test]
    fn test_nested_and_scalars() {
        let meta = Meta::new()
            .with("server", json!({ "version": "0.1.0" }))
            .with("healthy", true)
            .with("extra", Value::Null);
        assert_eq!(
            to_xml(&meta),
            "<map><server><version>0.1.0</version></server>\
             <healthy>true</healthy><extra></extra></map>"
        );
    }

    #[test]
    fn test_empty_map() {
        assert_eq!(to_xml(&Meta::new()), "<map></map>");
    }
}
