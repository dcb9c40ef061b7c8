/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! Plain-text comparison reports.
//!
//! Renders the rows of a message-set comparison as marker-prefixed text,
//! three lines per row:
//!
//! ```text
//! line 1
//!   A: =35=D <44=100.5
//!   B: =35=D >44=101.0
//! ```
//!
//! Markers follow the diff classification: `=` unchanged, `-` removed,
//! `+` added, `<`/`>` the two halves of a changed value. The change halves
//! come from running each row through `annotate_changes` before rendering.

use fixlens_diff::{ComparisonRow, DiffFragment, annotate_changes};

/// Renders comparison rows as a plain-text report.
///
/// # Arguments
/// * `rows` - The comparison rows, in line order
///
/// # Returns
/// The report text, newline-terminated. Empty input yields an empty string.
#[must_use]
pub fn render_report(rows: &[ComparisonRow]) -> String {
    let mut out = String::new();
    let mut line_buf = itoa::Buffer::new();

    for row in rows {
        let (fragments_a, fragments_b) = annotate_changes(&row.fragments_a, &row.fragments_b);

        out.push_str("line ");
        out.push_str(line_buf.format(row.line_number));
        out.push('\n');

        push_side(&mut out, "  A:", &fragments_a);
        push_side(&mut out, "  B:", &fragments_b);
    }
    out
}

/// Counts the rows whose sides do not fully agree.
///
/// # Arguments
/// * `rows` - The comparison rows
#[must_use]
pub fn differing_rows(rows: &[ComparisonRow]) -> usize {
    rows.iter().filter(|row| !row.is_identical()).count()
}

/// Appends one side's marker-prefixed fragments as a single line.
fn push_side(out: &mut String, label: &str, fragments: &[DiffFragment]) {
    out.push_str(label);
    for fragment in fragments {
        out.push(' ');
        out.push(fragment.kind.marker());
        out.push_str(&fragment.tag);
        out.push('=');
        out.push_str(&fragment.value);
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixlens_diff::DiffEngine;

    #[test]
    fn test_report_identical_row() {
        let rows = DiffEngine::new().compare_sets("35=D", "35=D");
        let report = render_report(&rows);
        assert_eq!(report, "line 1\n  A: =35=D\n  B: =35=D\n");
    }

    #[test]
    fn test_report_marks_changed_values() {
        let rows = DiffEngine::new().compare_sets("44=1", "44=2");
        let report = render_report(&rows);
        assert_eq!(report, "line 1\n  A: <44=1\n  B: >44=2\n");
    }

    #[test]
    fn test_report_keeps_presence_markers() {
        let rows = DiffEngine::new().compare_sets("1=X", "2=Y");
        let report = render_report(&rows);
        assert_eq!(report, "line 1\n  A: -1=X\n  B: +2=Y\n");
    }

    #[test]
    fn test_report_padded_row_has_empty_side() {
        let rows = DiffEngine::new().compare_sets("35=D\n35=8", "35=D");
        let report = render_report(&rows);
        assert_eq!(
            report,
            "line 1\n  A: =35=D\n  B: =35=D\nline 2\n  A: -35=8\n  B:\n"
        );
    }

    #[test]
    fn test_report_empty_input() {
        assert_eq!(render_report(&[]), "");
    }

    #[test]
    fn test_differing_rows() {
        let rows = DiffEngine::new().compare_sets("35=D\n44=1", "35=D\n44=2");
        assert_eq!(differing_rows(&rows), 1);

        let rows = DiffEngine::new().compare_sets("35=D", "35=D");
        assert_eq!(differing_rows(&rows), 0);
    }
}
