//! Topic list input
//!
//! A topic list is a single column of free text, one topic per line. Cells
//! may be quoted the way spreadsheet exports quote them.

use crate::Result;
use std::path::Path;
use tracing::debug;

/// Parse a topic column into a list of topics
///
/// Each line is trimmed and loses one pair of surrounding double quotes.
/// Blank lines are dropped.
///
/// # Examples
///
/// ```
/// use contentforge::topics::parse_topics;
///
/// let topics = parse_topics("Solar power\n\n\"Wind energy\"\n");
/// assert_eq!(topics, vec!["Solar power", "Wind energy"]);
/// ```
pub fn parse_topics(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('"')
                .and_then(|l| l.strip_suffix('"'))
                .unwrap_or(line)
                .trim()
        })
        .filter(|topic| !topic.is_empty())
        .map(String::from)
        .collect()
}

/// Read and parse a topic file
pub async fn read_topics(path: &Path) -> Result<Vec<String>> {
    let text = tokio::fs::read_to_string(path).await?;
    let topics = parse_topics(&text);
    debug!(path = %path.display(), count = topics.len(), "read topic list");
    Ok(topics)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn blank_cells_are_dropped() {
        let topics = parse_topics("  \nSolar power\n\t\n\"\"\nWind energy  \n");
        assert_eq!(topics, vec!["Solar power", "Wind energy"]);
    }

    #[test]
    fn quotes_are_only_stripped_in_pairs() {
        let topics = parse_topics("\"Quoted\"\n\"Half quoted\nSay \"hi\" politely");
        assert_eq!(
            topics,
            vec!["Quoted", "\"Half quoted", "Say \"hi\" politely"]
        );
    }

    #[test]
    fn crlf_lines_are_handled() {
        assert_eq!(parse_topics("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn read_topics_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Benefits of Solar Energy").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "\"Home battery storage\"").unwrap();

        let topics = read_topics(file.path()).await.unwrap();
        assert_eq!(topics, vec!["Benefits of Solar Energy", "Home battery storage"]);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_topics(&dir.path().join("nope.txt")).await.unwrap_err();
        assert_eq!(err.error_code(), "io_error");
    }
}
