use std::sync::LazyLock;

use regex::Regex;

use crate::{lazy_regex, utils::trim_text};

/// Stem used when no usable name can be derived.
pub const DEFAULT_FILE_STEM: &str = "文档";

const PDF_EXTENSION: &str = ".pdf";
const PART_SEPARATOR: &str = " - ";

static UNSAFE_CHARS: LazyLock<Regex> = lazy_regex!(r#"[\\/:*?"<>|]"#);

/// Replaces characters that are not allowed in file names with `_` and trims
/// surrounding whitespace.
#[must_use]
pub fn sanitize_file_name(value: &str) -> String {
    trim_text(&UNSAFE_CHARS.replace_all(value, "_")).to_string()
}

/// Appends `.pdf` unless `name` already ends with it, ignoring case.
#[must_use]
pub fn ensure_pdf_extension(name: &str) -> String {
    if name.to_lowercase().ends_with(PDF_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{PDF_EXTENSION}")
    }
}

#[must_use]
pub fn build_summary_price_name(summary: Option<&str>, price: Option<&str>) -> String {
    build_summary_price_name_with_fallback(summary, price, DEFAULT_FILE_STEM)
}

/// Builds a download name of the form `<summary> - <price>.pdf`.
///
/// Missing or empty parts are skipped. When nothing is left, `fallback` is
/// used, and a name that sanitizes down to nothing becomes
/// [`DEFAULT_FILE_STEM`]. The result is never empty and always carries the
/// `.pdf` extension.
#[must_use]
pub fn build_summary_price_name_with_fallback(
    summary: Option<&str>,
    price: Option<&str>,
    fallback: &str,
) -> String {
    let parts: Vec<&str> = [summary, price]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

    let base = if parts.is_empty() {
        fallback.to_string()
    } else {
        parts.join(PART_SEPARATOR)
    };
    let base: &str = if base.is_empty() { fallback } else { &base };

    let safe_base = sanitize_file_name(base);
    if safe_base.is_empty() {
        ensure_pdf_extension(DEFAULT_FILE_STEM)
    } else {
        ensure_pdf_extension(&safe_base)
    }
}
