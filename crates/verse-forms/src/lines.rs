/// Non-blank lines of a poem: each line trimmed, lines that trim to empty
/// dropped, original order preserved. Every form rule counts these lines.
pub fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::non_blank_lines;

    #[test]
    fn drops_blank_and_whitespace_lines() {
        let lines = non_blank_lines("one\n\n  \ntwo\n\t\nthree\n\n");
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn trims_each_line() {
        assert_eq!(non_blank_lines("  padded  "), vec!["padded"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(non_blank_lines("").is_empty());
        assert!(non_blank_lines("\n\n\n").is_empty());
    }
}
