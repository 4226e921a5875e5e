//! Text helpers. The tree never escapes text on its own; callers opt in.

/// Replaces `&`, `<`, `>`, `"` and `'` with their character references.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 10);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// `count` non-breaking spaces.
pub fn nbsp(count: usize) -> String {
    "&nbsp;".repeat(count)
}
