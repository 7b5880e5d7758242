/// Prefix marking an annotation as an editorial note rather than a clipping.
pub const NOTE_MARKER: &str = "[NOTE] ";

/// Escapes a value for a double-quoted TOML string.
pub fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out
}

/// `---` becomes an em dash and `--` an en dash.
pub fn expand_dashes(s: &str) -> String {
    s.replace("---", "\u{2014}").replace("--", "\u{2013}")
}

/// Pushes every heading down one level, so article headings sit below the
/// page title.
pub fn demote_headings(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for line in s.split_inclusive('\n') {
        if line.starts_with('#') {
            out.push('#');
        }
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_str_escapes_toml_specials() {
        assert_eq!(
            escape_str("say \"hi\"\\\nnext\r"),
            "say \\\"hi\\\"\\\\\\nnext\\r"
        );
        assert_eq!(escape_str("plain"), "plain");
    }

    #[test]
    fn expand_dashes_prefers_longest_run() {
        assert_eq!(expand_dashes("A---B--C"), "A—B–C");
        assert_eq!(expand_dashes("1961 --- Moon"), "1961 — Moon");
        assert_eq!(expand_dashes("a - b"), "a - b");
    }

    #[test]
    fn demote_headings_is_per_line() {
        assert_eq!(demote_headings("# Title"), "## Title");
        assert_eq!(demote_headings("Text # not heading"), "Text # not heading");
        assert_eq!(
            demote_headings("# One\nbody\n## Two\n"),
            "## One\nbody\n### Two\n"
        );
        assert_eq!(demote_headings(""), "");
    }
}
