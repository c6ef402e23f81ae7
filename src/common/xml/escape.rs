use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Automaton is built once and shared between threads
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use museo_danzas::common::xml::escape_xml;
/// assert_eq!(escape_xml("Haz clic en 'Ver video'"), "Haz clic en &apos;Ver video&apos;");
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}
