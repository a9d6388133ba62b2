/// Greedy word wrap; a word longer than `width` gets a line of its own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.chars().count() + 1 + word.chars().count() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Shortens `s` to at most `max_len` characters, ending in `…` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("1s2 2s2 2p6", 20), vec!["1s2 2s2 2p6"]);
    }

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(
            wrap("no atom at registry slot 4", 12),
            vec!["no atom at", "registry", "slot 4"]
        );
    }

    #[test]
    fn wrap_empty_text() {
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_leaves_fitting_text() {
        assert_eq!(truncate("3d10", 4), "3d10");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("1s2 2s2 2p6 3s2", 8), "1s2 2s2…");
        assert_eq!(truncate("↑↓↑↓", 3), "↑↓…");
        assert_eq!(truncate("abc", 0), "");
    }
}
