#[macro_export]
macro_rules! lazy_regex {
    ($s:expr) => {
        std::sync::LazyLock::new(|| {
            regex::Regex::new($s).expect("Static regex pattern must be valid")
        })
    };
}

/// Trims surrounding whitespace, including the byte order mark.
#[must_use]
pub fn trim_text(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Trims `value` and treats an empty result as unset.
#[must_use]
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| trim_text(&v).to_string())
        .filter(|v| !v.is_empty())
}
