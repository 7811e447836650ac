//! Turns opinion text that may carry markup into plain display text.

use once_cell::sync::Lazy;
use regex::Regex;

static STYLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<style\b[^>]*>[\s\S]*?</style>").expect("valid style pattern"));
static SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<script\b[^>]*>[\s\S]*?</script>").expect("valid script pattern"));
static BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>|</?p\b[^>]*>").expect("valid break pattern"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));

fn is_invisible(c: char) -> bool {
    matches!(c, '\u{200B}'..='\u{200D}' | '\u{FEFF}' | '\u{2060}'..='\u{2069}')
}

/// Strips scripts, styles and tags, decodes the common entities and
/// collapses blank lines. Paragraph and line breaks become `\n`.
pub fn clean_html_content(raw: &str) -> String {
    let content = STYLE_RE.replace_all(raw, "");
    let content = SCRIPT_RE.replace_all(&content, "");
    let content = BREAK_RE.replace_all(&content, "\n");
    let content = TAG_RE.replace_all(&content, "");

    // &amp; last so "&amp;lt;" stays literal
    let content = content
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&rsquo;", "\u{2019}")
        .replace("&amp;", "&");

    content
        .lines()
        .map(|line| {
            line.chars()
                .filter(|&c| !is_invisible(c))
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// First `max_chars` characters of the cleaned text, with an ellipsis when cut.
pub fn excerpt(raw: &str, max_chars: usize) -> String {
    let clean = clean_html_content(raw).replace('\n', " ");
    if clean.chars().count() <= max_chars {
        return clean;
    }
    let cut: String = clean.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_untouched() {
        let text = "Lagos-Calabar Coastal Railway is a 1,400-kilometre line.";
        assert_eq!(clean_html_content(text), text);
    }

    #[test]
    fn tags_scripts_and_styles_are_removed() {
        let raw = "<p>Build <strong>local</strong></p><script>alert('x')</script><style>p{}</style><p>capacity</p>";
        assert_eq!(clean_html_content(raw), "Build local\ncapacity");
    }

    #[test]
    fn entities_are_decoded_once() {
        assert_eq!(
            clean_html_content("Roads &amp; rail &lt;2030&gt; &amp;lt;"),
            "Roads & rail <2030> &lt;"
        );
    }

    #[test]
    fn breaks_and_invisible_characters() {
        let raw = "First<br/>\u{200B}Second<br>  \n<br />Third&nbsp;line";
        assert_eq!(clean_html_content(raw), "First\nSecond\nThird line");
    }

    #[test]
    fn excerpt_cuts_on_characters() {
        assert_eq!(excerpt("<p>Côte d'Ivoire</p>", 4), "Côte...");
        assert_eq!(excerpt("short", 10), "short");
    }
}
