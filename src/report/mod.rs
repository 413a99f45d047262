//! Tabular display and flat-file export of seeded entities.
//!
//! A failed export is logged and never propagated; reporting must not abort
//! a seeding phase.

mod rows;

pub use rows::{AssignmentRow, AuthUserRow, CompanyRow, IdentityUserRow, StoreUserRow};

use std::path::Path;

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Render rows as a psql-style table on stdout.
pub fn display<T: Tabled>(rows: &[T]) {
    let table = Table::new(rows).with(Style::psql()).to_string();
    println!("{table}\n");
}

/// Render rows and export them tab-delimited to `path`.
pub fn display_and_save<T: Tabled + Serialize>(rows: &[T], path: &Path) {
    display(rows);
    if let Err(e) = save_delimited(rows, path) {
        tracing::warn!(path = %path.display(), error = %e, "Failed to export report");
    }
}

fn save_delimited<T: Serialize>(rows: &[T], path: &Path) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_writes_tab_delimited_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assignments.csv");
        let rows = vec![
            AssignmentRow {
                company: "Roy Inc".to_string(),
                user_uid: "u1".to_string(),
            },
            AssignmentRow {
                company: "Roy Inc".to_string(),
                user_uid: "u2".to_string(),
            },
        ];

        display_and_save(&rows, &path);

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("company\tuser_uid"));
        assert_eq!(lines.next(), Some("Roy Inc\tu1"));
        assert_eq!(lines.next(), Some("Roy Inc\tu2"));
    }

    #[test]
    fn export_failure_does_not_panic() {
        let rows = vec![AssignmentRow {
            company: "Roy Inc".to_string(),
            user_uid: "u1".to_string(),
        }];
        // Directory path cannot be created as a file; the sink only logs.
        display_and_save(&rows, Path::new("/nonexistent-dir/report.csv"));
    }
}
