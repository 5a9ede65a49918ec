use std::borrow::Cow;

/// Decode the HTML entities the trivia API embeds in its strings.
pub fn display_text(raw: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(raw)
}
