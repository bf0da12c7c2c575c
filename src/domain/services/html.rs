//! `index.html` reference rewriting
//!
//! Replaces `src`/`href` attribute values that name a source file with the
//! public URL of its hashed output. Values are matched after stripping a
//! leading `./` or `/`, so `/src/main.js`, `./src/main.js` and `src/main.js`
//! all resolve to the same source id.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(src|href)(\s*=\s*)(?:"([^"]*)"|'([^']*)')"#)
        .expect("attribute pattern is valid")
});

/// Source id an attribute value points at
pub fn reference_id(value: &str) -> &str {
    let value = value.strip_prefix("./").unwrap_or(value);
    value.trim_start_matches('/')
}

/// Rewrite references. Returns the new document and the number of
/// attributes replaced.
pub fn rewrite_references(html: &str, urls: &HashMap<String, String>) -> (String, usize) {
    let mut replaced = 0;
    let out = ATTRIBUTE.replace_all(html, |caps: &Captures<'_>| {
        let (value, quote) = match (caps.get(3), caps.get(4)) {
            (Some(v), _) => (v.as_str(), '"'),
            (None, Some(v)) => (v.as_str(), '\''),
            (None, None) => return caps[0].to_string(),
        };
        match urls.get(reference_id(value)) {
            Some(url) => {
                replaced += 1;
                format!("{}{}{quote}{url}{quote}", &caps[1], &caps[2])
            }
            None => caps[0].to_string(),
        }
    });
    (out.into_owned(), replaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> HashMap<String, String> {
        HashMap::from([
            ("src/main.js".to_string(), "/js/app-1a2b3c4d.js".to_string()),
            (
                "src/css/style.css".to_string(),
                "/css/style-99aa00bb.css".to_string(),
            ),
        ])
    }

    #[test]
    fn reference_id_strips_prefixes() {
        assert_eq!(reference_id("/src/main.js"), "src/main.js");
        assert_eq!(reference_id("./src/main.js"), "src/main.js");
        assert_eq!(reference_id("src/main.js"), "src/main.js");
    }

    #[test]
    fn rewrites_script_and_link() {
        let html = r#"<link rel="stylesheet" href="./src/css/style.css">
<script type="module" src="/src/main.js"></script>"#;

        let (out, replaced) = rewrite_references(html, &urls());

        assert_eq!(replaced, 2);
        assert_eq!(
            out,
            r#"<link rel="stylesheet" href="/css/style-99aa00bb.css">
<script type="module" src="/js/app-1a2b3c4d.js"></script>"#
        );
    }

    #[test]
    fn keeps_single_quotes_and_unknown_references() {
        let html = "<script src='src/main.js'></script><a href=\"https://example.com\">x</a>";

        let (out, replaced) = rewrite_references(html, &urls());

        assert_eq!(replaced, 1);
        assert_eq!(
            out,
            "<script src='/js/app-1a2b3c4d.js'></script><a href=\"https://example.com\">x</a>"
        );
    }
}
