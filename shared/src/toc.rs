use std::fmt::Write;

/// Links inside a Notion table of contents.
pub const TOC_LINK_SELECTOR: &str = ".notion-table_of_contents a, .notion-table-of-contents a";

/// Id targeted by an in-page `href`, or `None` for anything but a non-empty `#fragment`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Serializes `ident` as a CSS identifier, following `CSS.escape`.
pub fn css_escape(ident: &str) -> String {
    let mut escaped = String::with_capacity(ident.len());
    let first = ident.chars().next();
    let single = ident.chars().nth(1).is_none();

    for (i, c) in ident.chars().enumerate() {
        match c {
            '\0' => escaped.push('\u{FFFD}'),
            '\u{1}'..='\u{1F}' | '\u{7F}' => {
                let _ = write!(escaped, "\\{:x} ", c as u32);
            }
            '0'..='9' if i == 0 || (i == 1 && first == Some('-')) => {
                let _ = write!(escaped, "\\{:x} ", c as u32);
            }
            '-' if i == 0 && single => escaped.push_str("\\-"),
            c if c as u32 >= 0x80 || c == '-' || c == '_' || c.is_ascii_alphanumeric() => {
                escaped.push(c)
            }
            c => {
                escaped.push('\\');
                escaped.push(c);
            }
        }
    }

    escaped
}

fn quote_attribute(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// A way of finding the element a table-of-contents link points at, in lookup order.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Selector(String),
    ElementId(String),
}

pub fn lookup_chain(id: &str) -> Vec<Lookup> {
    let quoted = quote_attribute(id);

    vec![
        Lookup::Selector(format!("#{}", css_escape(id))),
        Lookup::ElementId(id.to_string()),
        Lookup::Selector(format!("[data-id=\"{quoted}\"]")),
        Lookup::Selector(format!(
            ".notion-header[id=\"{quoted}\"], .notion-block[id=\"{quoted}\"]"
        )),
    ]
}

/// Document offset to scroll to so the target sits `offset` pixels below the viewport top.
pub fn scroll_target(element_top: f64, page_offset: f64, offset: f64) -> f64 {
    (element_top + page_offset - offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fragments_are_targets() {
        assert_eq!(anchor_target("#intro"), Some("intro"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/posts/intro"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn escapes_like_the_browser() {
        assert_eq!(css_escape("plain-id_1"), "plain-id_1");
        assert_eq!(css_escape("1abc"), "\\31 abc");
        assert_eq!(css_escape("-1a"), "-\\31 a");
        assert_eq!(css_escape("-"), "\\-");
        assert_eq!(css_escape("a.b:c"), "a\\.b\\:c");
        assert_eq!(css_escape("a\u{1}"), "a\\1 ");
        assert_eq!(css_escape("제목"), "제목");
    }

    #[test]
    fn lookup_order() {
        let chain = lookup_chain("3a\"x");

        assert_eq!(chain[0], Lookup::Selector("#\\33 a\\\"x".to_string()));
        assert_eq!(chain[1], Lookup::ElementId("3a\"x".to_string()));
        assert_eq!(
            chain[2],
            Lookup::Selector("[data-id=\"3a\\\"x\"]".to_string())
        );
        assert_eq!(chain.len(), 4);
    }

    #[test]
    fn scroll_target_is_clamped() {
        assert_eq!(scroll_target(300.0, 1000.0, 80.0), 1220.0);
        assert_eq!(scroll_target(20.0, 0.0, 80.0), 0.0);
    }
}
