//! Output writing for the CLI

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use apiranklib::RankedItem;
use tracing::info;

/// Serialize a ranking as a single JSON value.
pub fn ranking_json(items: &[RankedItem<String>], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(items)
    } else {
        serde_json::to_string(items)
    }
}

/// Write `text` to the given file, or to stdout when no file is given.
pub fn write_output(text: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "wrote output file");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", text)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking() -> Vec<RankedItem<String>> {
        vec![
            RankedItem {
                label: "pad".to_string(),
                count: 2,
                rank: 1,
            },
            RankedItem {
                label: "reshape".to_string(),
                count: 1,
                rank: 2,
            },
        ]
    }

    #[test]
    fn test_compact_json() {
        let json = ranking_json(&ranking(), false).unwrap();
        assert_eq!(
            json,
            r#"[{"label":"pad","count":2,"rank":1},{"label":"reshape","count":1,"rank":2}]"#
        );
    }

    #[test]
    fn test_pretty_json_round_trips() {
        let json = ranking_json(&ranking(), true).unwrap();
        assert!(json.contains('\n'));
        let parsed: Vec<RankedItem<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ranking());
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranks.html");
        write_output("<table></table>", Some(path.as_path())).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<table></table>");
    }
}
