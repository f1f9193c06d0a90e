use std::sync::LazyLock;

use regex::{Captures, Regex};

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static NAMED_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\s*/?\s*([a-zA-Z][a-zA-Z0-9]*)[^>]*>").unwrap());
static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").unwrap());
static BLANK_LINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

const BLOCK_TAGS: &[&str] = &[
    "p", "br", "div", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "tr", "table",
    "blockquote", "section",
];

/// Drop every tag, decode entities, trim.
pub fn strip_tags(html: &str) -> String {
    decode_entities(&TAG_RE.replace_all(html, "")).trim().to_string()
}

/// Tag-stripped text where block-level tags become line breaks. Lines are
/// trimmed and runs of blank lines collapse to one.
pub fn html_to_text(html: &str) -> String {
    let broken = NAMED_TAG_RE.replace_all(html, |caps: &Captures| {
        let name = caps[1].to_ascii_lowercase();
        if BLOCK_TAGS.contains(&name.as_str()) {
            "\n"
        } else {
            ""
        }
    });
    // leftovers such as comments
    let bare = TAG_RE.replace_all(&broken, "");
    let decoded = decode_entities(&bare);

    let lines: Vec<&str> = decoded.lines().map(str::trim).collect();
    let joined = lines.join("\n");
    BLANK_LINES_RE
        .replace_all(&joined, "\n\n")
        .trim()
        .to_string()
}

pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(body: &str) -> Option<String> {
    if let Some(num) = body.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }
    let c = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "ndash" => '–',
        "mdash" => '—',
        "hellip" => '…',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        _ => return None,
    };
    Some(c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_nested_tags() {
        assert_eq!(
            strip_tags("  <span class=\"a\"><bdi>Golf <em>Towel</em></bdi></span>\n"),
            "Golf Towel"
        );
    }

    #[test]
    fn entities() {
        assert_eq!(decode_entities("&#36;30.00 &ndash; &#x24;35.00"), "$30.00 – $35.00");
        assert_eq!(decode_entities("Tom &amp; Jerry&rsquo;s"), "Tom & Jerry’s");
        assert_eq!(decode_entities("&bogus; stays"), "&bogus; stays");
        assert_eq!(decode_entities("a&nbsp;b"), "a b");
    }

    #[test]
    fn block_tags_become_lines() {
        let html = concat!(
            "<h2>Description</h2>\n",
            "<p>Soft <strong>cotton</strong> towel.</p>",
            "<ul><li>40cm</li><li>Machine wash</li></ul>"
        );
        assert_eq!(
            html_to_text(html),
            "Description\n\nSoft cotton towel.\n\n40cm\n\nMachine wash"
        );
    }

    #[test]
    fn br_splits_line() {
        assert_eq!(html_to_text("one<br/>two<br />three"), "one\ntwo\nthree");
    }

    #[test]
    fn empty_markup() {
        assert_eq!(html_to_text("<div>\n  <p></p>\n</div>"), "");
    }
}
