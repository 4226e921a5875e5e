#![allow(dead_code)]

use htmlgen::Node;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Asserts that `needle` occurs exactly once in `haystack`.
pub fn assert_contains_once(haystack: &str, needle: &str) {
    let count = haystack.matches(needle).count();
    assert_eq!(
        count, 1,
        "expected exactly one occurrence of {needle:?}, found {count} in:\n{haystack}"
    );
}

/// Byte offset of `needle`, failing the test when it is missing.
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in:\n{haystack}"))
}

/// The part of a rendered page between `<head>` and `</head>`.
pub fn head_section(page: &dyn Node) -> String {
    let html = page.html();
    let start = position(&html, "<head>");
    let end = position(&html, "</head>");
    html[start..end].to_string()
}

/// The part of a rendered page between `<body>` and `</body>`.
pub fn body_section(page: &dyn Node) -> String {
    let html = page.html();
    let start = position(&html, "<body>");
    let end = position(&html, "</body>");
    html[start..end].to_string()
}
