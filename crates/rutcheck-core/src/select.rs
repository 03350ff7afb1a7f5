use crate::report::RowRecord;
use chrono::NaiveDate;

/// Zero-based position of the date column in the portal's history table.
const DATE_COLUMN: usize = 5;

/// Date format rendered by the portal, e.g. `17-04-2023`.
const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse the date out of one table row.
///
/// Every positional assumption about the remote table lives here; if the
/// portal reorders its columns, this is the only place to touch. Returns
/// `None` for rows that are too short or whose date cell does not parse.
pub fn row_date(row: &[String]) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(row.get(DATE_COLUMN)?, DATE_FORMAT).ok()
}

/// Pick the row with the most recent date.
///
/// Single pass over the input, which is never assumed to be sorted. Rows
/// without a usable date are skipped, not errored. Only a strictly newer
/// date replaces the running best, so ties keep the first row encountered.
/// Returns `None` when no row carries a parseable date.
pub fn select_most_recent(rows: &[RowRecord]) -> Option<&RowRecord> {
    let mut best: Option<(&RowRecord, NaiveDate)> = None;

    for row in rows {
        let Some(date) = row_date(row) else { continue };
        match best {
            Some((_, current)) if date <= current => {}
            _ => best = Some((row, date)),
        }
    }

    best.map(|(row, _)| row)
}
