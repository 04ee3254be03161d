//! Script text to command records.

/// One command: its whitespace-separated tokens and the line they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based.
    pub line: usize,
    pub tokens: Vec<String>,
}

/// Splits `source` into records, one per non-empty line.
///
/// Lines whose first token starts with `#` are comments.
pub fn tokenize(source: &str) -> Vec<Record> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let tokens: Vec<String> = line.split_ascii_whitespace().map(str::to_string).collect();
            match tokens.first() {
                None => None,
                Some(first) if first.starts_with('#') => None,
                Some(_) => Some(Record { line: i + 1, tokens }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_and_comment_lines() {
        let src = "# shapes\n\ndefine s1 square 40\n   \n  #draw red s1 0 0\ndraw red s1 100 100\n";
        let records = tokenize(src);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 3);
        assert_eq!(records[0].tokens, ["define", "s1", "square", "40"]);
        assert_eq!(records[1].line, 6);
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        let records = tokenize("moveby\t\t8   \r\n");
        assert_eq!(records[0].tokens, ["moveby", "8"]);
    }

    #[test]
    fn empty_source_has_no_records() {
        assert!(tokenize("").is_empty());
    }
}
