//! Plain-text table renderer.

use crate::application::ports::TableRenderer;

/// Cell separator. Empty cells collapse to nothing between two separators,
/// which is how the report renders a service with no published ports.
const SEPARATOR: &str = " | ";

/// Renders header and rows as `cell | cell | ...` lines on stdout.
pub struct TextTable;

impl TableRenderer for TextTable {
    fn render(&self, header: &[&str], rows: &[Vec<String>]) {
        println!("{}", header.join(SEPARATOR));
        for row in rows {
            println!("{}", row.join(SEPARATOR));
        }
    }
}

/// Join one row the way [`TextTable`] prints it. Split out so tests can
/// assert the exact line format without capturing stdout.
#[must_use]
pub fn format_row(cells: &[&str]) -> String {
    cells.join(SEPARATOR)
}
