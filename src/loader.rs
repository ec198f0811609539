// Corpus loading: one Statement per .txt file, date taken from the filename.
use crate::model::{Institution, LoadError, Statement};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Loads every `.txt` statement under `dir` for one institution, sorted by
/// date ascending. A file with an unparseable name or undecodable contents
/// is skipped with a warning; it never aborts the load.
pub fn load_statements(dir: &Path, institution: Institution) -> Result<Vec<Statement>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::DirectoryMissing {
            path: dir.display().to_string(),
        });
    }

    let entries = fs::read_dir(dir).map_err(|source| LoadError::DirectoryUnreadable {
        path: dir.display().to_string(),
        source,
    })?;

    let mut statements = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable directory entry in {}: {e}", dir.display());
                continue;
            }
        };
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!("Skipping {}: non-UTF-8 filename", path.display());
            continue;
        };
        let date = match parse_statement_date(stem) {
            Ok(d) => d,
            Err(e) => {
                warn!("Skipping {}: {e}", path.display());
                continue;
            }
        };

        let text = match fs::read_to_string(&path) {
            Ok(t) => t,
            Err(e) => {
                warn!("Skipping {}: {e}", path.display());
                continue;
            }
        };

        let word_count = text.split_whitespace().count();
        statements.push(Statement {
            institution,
            date,
            text,
            word_count,
            filename: entry.file_name().to_string_lossy().into_owned(),
        });
    }

    statements.sort_by_key(|s| s.date);
    Ok(statements)
}

/// Filename stems encode the date as `YYYY-MM-DD`; some scraped files carry
/// a leftover `-txt` suffix that is stripped first.
fn parse_statement_date(stem: &str) -> Result<NaiveDate, chrono::ParseError> {
    let date_str = stem.strip_suffix("-txt").unwrap_or(stem);
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_statement(dir: &Path, name: &str, text: &str) {
        fs::write(dir.join(name), text).unwrap();
    }

    #[test]
    fn date_is_extracted_from_the_filename() {
        for (stem, expected) in [
            ("2015-01-01", NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()),
            ("2019-12-11", NaiveDate::from_ymd_opt(2019, 12, 11).unwrap()),
            ("2008-03-18-txt", NaiveDate::from_ymd_opt(2008, 3, 18).unwrap()),
        ] {
            assert_eq!(parse_statement_date(stem).unwrap(), expected);
        }
    }

    #[test]
    fn statements_come_back_sorted_by_date() {
        let dir = tempfile::tempdir().unwrap();
        write_statement(dir.path(), "2016-06-15.txt", "later statement");
        write_statement(dir.path(), "2014-01-29.txt", "earliest statement");
        write_statement(dir.path(), "2015-03-18.txt", "middle statement");

        let statements = load_statements(dir.path(), Institution::Fed).unwrap();
        let dates: Vec<_> = statements.iter().map(|s| s.date.to_string()).collect();
        assert_eq!(dates, ["2014-01-29", "2015-03-18", "2016-06-15"]);
        assert_eq!(statements[0].word_count, 2);
        assert_eq!(statements[0].filename, "2014-01-29.txt");
    }

    #[test]
    fn bad_filenames_and_foreign_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_statement(dir.path(), "2015-01-01.txt", "kept");
        write_statement(dir.path(), "press-release.txt", "no date in name");
        write_statement(dir.path(), "2015-02-02.pdf", "wrong extension");
        // invalid UTF-8 payload
        fs::write(dir.path().join("2015-03-03.txt"), [0xff, 0xfe, 0x41]).unwrap();

        let statements = load_statements(dir.path(), Institution::Rbnz).unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].text, "kept");
    }

    #[test]
    fn missing_directory_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = load_statements(&missing, Institution::Fed).unwrap_err();
        assert!(matches!(err, LoadError::DirectoryMissing { .. }));
    }
}
