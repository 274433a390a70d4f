//! Statement splitting
//!
//! This module turns the raw text of a script file into an ordered list of
//! SQL statements. It is purely line-oriented: no SQL parsing, no awareness
//! of quoting or of separators embedded inside string literals.

/// Split script text into individual SQL statements.
///
/// With `separator == None`, every non-blank line is its own statement:
/// lines are trimmed and lines whose trimmed form starts with `#` are
/// dropped. With `Some(separator)`, lines are concatenated (untrimmed, with
/// no newline reinserted) into an accumulator until the separator substring
/// is found; the accumulated text up to the separator is emitted as one
/// statement. Lines starting with `#` or `--` are comments and, in separator
/// mode, discard whatever has been accumulated so far. Content left in the
/// accumulator when the input ends is discarded.
pub fn split_sql(text: &str, separator: Option<&str>) -> Vec<String> {
    let mut statements = Vec::new();

    match separator {
        None => {
            for token in lines(text) {
                let token = token.trim();
                // Compatibility quirk carried over from the original tool:
                // only `#` marks a comment here; `--` lines pass through and
                // are handed to the database as-is.
                if !token.starts_with('#') && !token.is_empty() {
                    statements.push(token.to_string());
                }
            }
        }
        Some(separator) => {
            let mut buffer = String::new();
            for line in lines(text) {
                // A comment line throws away any partial statement.
                if line.starts_with('#') || line.starts_with("--") {
                    buffer.clear();
                } else if let Some(pos) = line.find(separator) {
                    buffer.push_str(&line[..pos]);
                    statements.push(std::mem::take(&mut buffer));
                } else {
                    buffer.push_str(line);
                }
            }
        }
    }

    statements
}

/// Iterate over lines, treating any run of `\n`/`\r` as a single delimiter.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r']).filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_mode_filters_comments_and_blanks() {
        let text = "# comment\nCREATE TABLE t (a INT);\n\nINSERT INTO t VALUES (1);";
        assert_eq!(
            split_sql(text, None),
            vec!["CREATE TABLE t (a INT);", "INSERT INTO t VALUES (1);"]
        );
    }

    #[test]
    fn line_mode_trims_each_line() {
        let text = "  SELECT 1  \n\tSELECT 2\t";
        assert_eq!(split_sql(text, None), vec!["SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn line_mode_does_not_filter_dash_comments() {
        // Pins the asymmetry of the original tool: `--` lines are only
        // recognized as comments in separator mode.
        let text = "-- not filtered here\nSELECT 1";
        assert_eq!(
            split_sql(text, None),
            vec!["-- not filtered here", "SELECT 1"]
        );
    }

    #[test]
    fn line_mode_hash_only_at_line_start() {
        let text = "SELECT '#' FROM t";
        assert_eq!(split_sql(text, None), vec!["SELECT '#' FROM t"]);
    }

    #[test]
    fn separator_mode_splits_on_substring() {
        let text = "INSERT INTO t VALUES (1);\nINSERT INTO t VALUES\n(2);";
        assert_eq!(
            split_sql(text, Some(";")),
            vec!["INSERT INTO t VALUES (1)", "INSERT INTO t VALUES(2)"]
        );
    }

    #[test]
    fn separator_mode_multi_line_concatenation_omits_newlines() {
        let text = "CREATE TABLE t (\na INT,\nb INT\n);\n";
        assert_eq!(
            split_sql(text, Some(";")),
            vec!["CREATE TABLE t (a INT,b INT)"]
        );
    }

    #[test]
    fn separator_mode_comment_resets_accumulator() {
        let text = "INSERT INTO\n-- oops\nt VALUES (1);";
        assert_eq!(split_sql(text, Some(";")), vec!["t VALUES (1)"]);
    }

    #[test]
    fn separator_mode_comment_discards_everything_before_it() {
        // The discarded prefix must not leak into any later statement.
        let text = "SELECT a\n# reset\nSELECT b;\n";
        assert_eq!(split_sql(text, Some(";")), vec!["SELECT b"]);
    }

    #[test]
    fn separator_mode_comment_reset_can_drop_all_statements() {
        let text = "INSERT INTO\n-- oops\nt VALUES (1)";
        assert_eq!(split_sql(text, Some(";")), Vec::<String>::new());
    }

    #[test]
    fn separator_mode_does_not_trim_or_drop_empty_statements() {
        let text = "SELECT 1;\n;\n";
        assert_eq!(split_sql(text, Some(";")), vec!["SELECT 1", ""]);
    }

    #[test]
    fn separator_mode_discards_rest_of_line_after_separator() {
        // Only the first occurrence per line is honored; whatever follows it
        // on the same line is dropped, not carried into the next statement.
        let text = "SELECT 1; SELECT 2;\nSELECT 3;\n";
        assert_eq!(split_sql(text, Some(";")), vec!["SELECT 1", "SELECT 3"]);
    }

    #[test]
    fn separator_mode_trailing_content_without_separator_is_discarded() {
        let text = "SELECT 1;\nSELECT 2";
        assert_eq!(split_sql(text, Some(";")), vec!["SELECT 1"]);
    }

    #[test]
    fn separator_mode_multi_character_separator() {
        let text = "SELECT 1//\nSELECT 2//\n";
        assert_eq!(split_sql(text, Some("//")), vec!["SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn empty_separator_emits_one_empty_statement_per_line() {
        // "" matches at position 0 on every non-comment line, so nothing
        // ever reaches the accumulator.
        let text = "SELECT 1\n# comment\nSELECT 2\n";
        assert_eq!(split_sql(text, Some("")), vec!["", ""]);
    }

    #[test]
    fn empty_input_yields_no_statements() {
        assert_eq!(split_sql("", None), Vec::<String>::new());
        assert_eq!(split_sql("", Some(";")), Vec::<String>::new());
    }

    #[test]
    fn blank_lines_and_crlf_runs_are_skipped() {
        let text = "SELECT 1\r\n\r\n\nSELECT 2\r";
        assert_eq!(split_sql(text, None), vec!["SELECT 1", "SELECT 2"]);
        let text = "SELECT 1;\r\n\r\nSELECT 2;\r\n";
        assert_eq!(split_sql(text, Some(";")), vec!["SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn splitting_is_deterministic() {
        let text = "SELECT 1;\nSELECT 2;\n-- comment\nSELECT 3;\n";
        assert_eq!(split_sql(text, Some(";")), split_sql(text, Some(";")));
        assert_eq!(split_sql(text, None), split_sql(text, None));
    }
}
