//! Fixed-width row layout shared by every listing.

/// Column geometry for value listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    /// Values per row.
    pub columns: usize,
    /// Right-justified field width of each value.
    pub width: usize,
}

impl RowLayout {
    /// Render `values` as rows of at most `columns` values.
    ///
    /// A line break follows every full row and any trailing partial row, so
    /// the output is empty for no values and otherwise ends with `\n`.
    pub fn render(&self, values: &[i32]) -> String {
        let columns = self.columns.max(1);
        let mut out = String::new();
        for row in values.chunks(columns) {
            for value in row {
                out.push_str(&format!("{value:>width$}", width = self.width));
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: RowLayout = RowLayout {
        columns: 3,
        width: 4,
    };

    #[test]
    fn full_and_partial_rows_each_end_with_newline() {
        let out = LAYOUT.render(&[1, 22, 333, 4444, 5]);
        assert_eq!(out, "   1  22 333\n4444   5\n");
    }

    #[test]
    fn exact_multiple_has_no_extra_blank_line() {
        let out = LAYOUT.render(&[1, 2, 3]);
        assert_eq!(out, "   1   2   3\n");
    }

    #[test]
    fn empty_renders_nothing() {
        assert_eq!(LAYOUT.render(&[]), "");
    }

    #[test]
    fn wide_values_are_not_truncated() {
        let layout = RowLayout {
            columns: 10,
            width: 2,
        };
        assert_eq!(layout.render(&[-12345]), "-12345\n");
    }
}
