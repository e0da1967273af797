//! Input collaborators: harvested address rows and person name rows.
//!
//! Both sources arrive as small CSV files with fixed schemas:
//!
//! - addresses: `street,zip_code` (streets may be quoted and contain commas)
//! - names: `name` (an optional leading index column is tolerated)
//!
//! A missing or unreadable file is fatal ([`Error::MissingInput`]). A row
//! with an empty street or name is soft: it is skipped with a warning and the
//! run continues.

use crate::augment::RawAddress;
use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Split one CSV line, honoring double-quoted fields and `""` escapes.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            Error::missing_input(format!("{}: file not found", path.display()))
        }
        _ => Error::Io(e),
    })
}

fn is_header(fields: &[String], names: &[&str]) -> bool {
    fields
        .iter()
        .any(|f| names.contains(&f.trim().to_lowercase().as_str()))
}

/// Read harvested `street,zip_code` rows. Rows with an empty street are
/// skipped (soft), not fatal.
pub fn read_addresses(path: &Path) -> Result<Vec<RawAddress>> {
    let content = read_file(path)?;
    let mut rows = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_csv_line(line);
        if lineno == 0 && is_header(&fields, &["street", "zip_code"]) {
            continue;
        }
        let street = fields[0].trim().to_string();
        if street.is_empty() {
            log::warn!("{}:{}: empty street, row skipped", path.display(), lineno + 1);
            continue;
        }
        let zip_code = fields.get(1).map(|z| z.trim().to_string()).unwrap_or_default();
        rows.push(RawAddress { street, zip_code });
    }
    Ok(rows)
}

/// Read person name rows. Rows with an empty name are skipped (soft).
pub fn read_names(path: &Path) -> Result<Vec<String>> {
    let content = read_file(path)?;
    let mut names = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_csv_line(line);
        if lineno == 0 && is_header(&fields, &["name"]) {
            continue;
        }
        // Tolerate an index column by taking the last field.
        let name = fields.last().map(|f| f.trim().to_string()).unwrap_or_default();
        if name.is_empty() {
            log::warn!("{}:{}: empty name, row skipped", path.display(), lineno + 1);
            continue;
        }
        names.push(name);
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_csv(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn quoted_streets_keep_their_commas() {
        let f = temp_csv("street,zip_code\n\"Blk 123, Serangoon Avenue 4\",550123\n");
        let rows = read_addresses(f.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].street, "Blk 123, Serangoon Avenue 4");
        assert_eq!(rows[0].zip_code, "550123");
    }

    #[test]
    fn empty_street_rows_are_skipped() {
        let f = temp_csv("street,zip_code\n,550123\nBishan Street 22,570456\n");
        let rows = read_addresses(f.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].street, "Bishan Street 22");
    }

    #[test]
    fn missing_zip_defaults_to_empty() {
        let f = temp_csv("Holland Road\n");
        let rows = read_addresses(f.path()).unwrap();
        assert_eq!(rows[0].zip_code, "");
    }

    #[test]
    fn names_tolerate_index_column() {
        let f = temp_csv(",name\n0,John Tan\n1,Siti binti Abdullah\n2,\n");
        let names = read_names(f.path()).unwrap();
        assert_eq!(names, vec!["John Tan", "Siti binti Abdullah"]);
    }

    #[test]
    fn missing_file_is_fatal_with_path_context() {
        let err = read_addresses(Path::new("/nonexistent/addresses.csv")).unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
        assert!(err.to_string().contains("addresses.csv"));
    }

    #[test]
    fn csv_quote_escapes() {
        assert_eq!(
            split_csv_line(r#""say ""hi"", ok",2"#),
            vec![r#"say "hi", ok"#.to_string(), "2".to_string()]
        );
    }
}
