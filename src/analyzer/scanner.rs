use crate::core::SourceLine;

/// Split source text into non-blank, trimmed lines paired with their 1-based
/// original line numbers.
///
/// Empty or whitespace-only input yields an empty sequence; downstream
/// stages treat that as insufficient data, not as an error.
pub fn scan(source: &str) -> Vec<SourceLine> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(SourceLine {
                    number: index + 1,
                    content: trimmed.to_string(),
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(scan("").is_empty());
        assert!(scan("   \n\t\n  \n").is_empty());
    }

    #[test]
    fn blank_lines_are_skipped_but_numbering_is_preserved() {
        let lines = scan("int a = 0;\n\n  return a;\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].number, 1);
        assert_eq!(lines[0].content, "int a = 0;");
        assert_eq!(lines[1].number, 3);
        assert_eq!(lines[1].content, "return a;");
    }

    #[test]
    fn leading_and_trailing_whitespace_is_trimmed() {
        let lines = scan("    x += 1;\t\n");
        assert_eq!(lines[0].content, "x += 1;");
    }
}
