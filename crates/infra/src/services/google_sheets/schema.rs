use leadflow_domain::RowId;
use std::collections::HashMap;

/// Layout of a table stored in a spreadsheet tab.
///
/// `columns` is the order in which new rows are written. Existing sheets are
/// read through a `ColumnMap` resolved from the header row, so columns can be
/// moved around in the sheet without breaking the stores.
#[derive(Debug, Clone, Copy)]
pub struct SheetSchema {
    pub version: u32,
    pub tab: &'static str,
    pub columns: &'static [&'static str],
}

pub const REGISTRANT_SCHEMA: SheetSchema = SheetSchema {
    // Version 1 had a `Retirement Timeline` column after `Agency` and no
    // sent flags
    version: 2,
    tab: "Sheet1",
    columns: &[
        "First Name",
        "Last Name",
        "Email",
        "Agency",
        "Submitted At",
        "Source",
        "Webinar_ID",
        "Webinar_Date",
        "Email_Confirmation_Sent",
        "Email_7Day_Sent",
        "Email_3Day_Sent",
        "Email_1Day_Sent",
        "Email_DayOf_Sent",
    ],
};

pub const CONTACT_SCHEMA: SheetSchema = SheetSchema {
    version: 1,
    tab: "Sheet1",
    columns: &[
        "First Name",
        "Last Name",
        "Email",
        "Phone",
        "Message",
        "Submitted At",
        "Source",
    ],
};

pub const CALL_BOOKING_SCHEMA: SheetSchema = SheetSchema {
    version: 1,
    tab: "Call Bookings",
    columns: &[
        "Timestamp",
        "Name",
        "Email",
        "Phone",
        "Topic",
        "Assigned To",
        "Qualified",
        "Is Federal",
        "Wants Advisor",
        "Single Question",
    ],
};

/// Converts a 0-indexed column to its letter, 0 -> A, 25 -> Z, 26 -> AA
pub fn column_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

impl SheetSchema {
    fn quoted_tab(&self) -> String {
        if self.tab.contains(' ') {
            format!("'{}'", self.tab)
        } else {
            self.tab.to_string()
        }
    }

    /// Range inside the tab, e.g. `'Call Bookings'!A:J`
    fn tab_range(&self, range: &str) -> String {
        format!("{}!{}", self.quoted_tab(), range)
    }

    /// Every cell of the tab
    pub fn sheet_range(&self) -> String {
        self.quoted_tab()
    }

    pub fn header_range(&self) -> String {
        self.tab_range("1:1")
    }

    /// First `width` columns of the tab
    pub fn table_range(&self, width: usize) -> String {
        self.tab_range(&format!("A:{}", column_letter(width.max(1) - 1)))
    }

    pub fn cell_range(&self, column_index: usize, row: RowId) -> String {
        self.tab_range(&format!("{}{}", column_letter(column_index), row))
    }

    pub fn header_row(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.to_string()).collect()
    }
}

/// Parses the row number from an updated range like `Sheet1!A2:M2`
pub fn parse_updated_row(updated_range: &str) -> Option<RowId> {
    let cells = updated_range.rsplit('!').next()?;
    let first_cell = cells.split(':').next()?;
    first_cell
        .trim_start_matches(|c: char| c.is_ascii_alphabetic())
        .parse::<u32>()
        .ok()
        .map(RowId)
}

/// Column positions of a sheet, resolved from its header row
#[derive(Debug, Clone)]
pub struct ColumnMap {
    indexes: HashMap<String, usize>,
    /// Schema columns the header does not contain yet, in schema order
    missing: Vec<String>,
}

impl ColumnMap {
    /// Columns missing from `header` are placed after the last header
    /// cell, in schema order. An empty header resolves to the schema order.
    pub fn resolve(schema: &SheetSchema, header: &[String]) -> Self {
        let mut indexes = HashMap::new();
        let mut missing = Vec::new();
        for column in schema.columns {
            let position = header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column));
            let index = match position {
                Some(index) => index,
                None => {
                    missing.push(column.to_string());
                    header.len() + missing.len() - 1
                }
            };
            indexes.insert(column.to_string(), index);
        }
        if header.is_empty() {
            missing.clear();
        }
        Self { indexes, missing }
    }

    /// Header cells to append so that every schema column is present
    pub fn missing_columns(&self) -> &[String] {
        &self.missing
    }

    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.indexes.get(column).copied()
    }

    /// Position of `column` when it is present in the sheet header
    pub fn header_index_of(&self, column: &str) -> Option<usize> {
        if self.missing.iter().any(|m| m == column) {
            return None;
        }
        self.index_of(column)
    }

    /// Value of `column` in `row`, empty when the cell is missing
    pub fn get(&self, row: &[String], column: &str) -> String {
        self.index_of(column)
            .and_then(|i| row.get(i))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    pub fn get_opt(&self, row: &[String], column: &str) -> Option<String> {
        Some(self.get(row, column)).filter(|v| !v.is_empty())
    }

    /// Number of cells in a row built by `build_row`
    pub fn width(&self) -> usize {
        self.indexes.values().max().map(|i| i + 1).unwrap_or(0)
    }

    /// Builds a row from `(column, value)` pairs with every value placed
    /// in its resolved column
    pub fn build_row(&self, values: &[(&str, &str)]) -> Vec<String> {
        let mut row = vec![String::new(); self.width()];
        for (column, value) in values {
            if let Some(index) = self.index_of(column) {
                row[index] = value.to_string();
            }
        }
        row
    }
}
