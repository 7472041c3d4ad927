//! Fixed-column rate-sheet parsing.
//!
//! Column order: name, price, DA, DR, genre, turnaround, sponsored, indexed,
//! dofollow, image, video, region, erotic, health, cbd, crypto, gambling.
//! The first row is a header and is skipped. Cells are coerced, never
//! rejected: `Y`/`y` means true and anything else false, a price or score
//! that fails to parse becomes 0.

use crate::catalog::PublicationDraft;
use crate::import::{ImportReport, RowError};
use crate::money::{Currency, Money};

/// Number of columns a rate sheet carries.
pub const SHEET_COLUMNS: usize = 17;

/// A parsed data row, tagged with its 1-based row number.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub row: usize,
    pub draft: PublicationDraft,
}

/// Result of parsing a sheet: the usable drafts plus a report shell.
///
/// `report.imported` stays 0 here; the store-side apply step fills it in.
#[derive(Debug, Clone, Default)]
pub struct SheetParse {
    pub rows: Vec<SheetRow>,
    pub report: ImportReport,
}

/// Coerce a Y/N cell. `Y` or `y` is true; anything else, including blanks
/// and typos, is false.
pub fn parse_flag(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("y")
}

/// Coerce a numeric score cell; non-numeric becomes 0.
pub fn parse_score(raw: &str) -> i32 {
    raw.trim().parse::<i32>().unwrap_or(0)
}

/// Parse a raw delimited-text blob into publication drafts.
///
/// Rows with a blank publication name are skipped and counted; rows the CSV
/// layer cannot read are recorded as errors. Neither aborts the sheet.
pub fn parse_sheet(data: &str, currency: Currency) -> SheetParse {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let mut parse = SheetParse::default();

    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        parse.report.total += 1;

        let record = match record {
            Ok(record) => record,
            Err(e) => {
                parse.report.errors.push(RowError {
                    row,
                    name: None,
                    message: e.to_string(),
                });
                continue;
            }
        };

        let cell = |i: usize| record.get(i).unwrap_or("").trim();

        let name = cell(0);
        if name.is_empty() {
            parse.report.skipped += 1;
            continue;
        }

        let mut draft = PublicationDraft::new(
            name,
            Money::parse(cell(1), currency).unwrap_or_else(|| Money::zero(currency)),
        );
        draft.da_score = parse_score(cell(2));
        draft.dr_score = parse_score(cell(3));
        draft.genre = non_empty(cell(4));
        draft.turnaround = non_empty(cell(5));
        draft.features.sponsored = parse_flag(cell(6));
        draft.features.indexed = parse_flag(cell(7));
        draft.features.dofollow = parse_flag(cell(8));
        draft.features.image = parse_flag(cell(9));
        draft.features.video = parse_flag(cell(10));
        draft.region = non_empty(cell(11));
        draft.restrictions.erotic = parse_flag(cell(12));
        draft.restrictions.health = parse_flag(cell(13));
        draft.restrictions.cbd = parse_flag(cell(14));
        draft.restrictions.crypto = parse_flag(cell(15));
        draft.restrictions.gambling = parse_flag(cell(16));

        parse.rows.push(SheetRow { row, draft });
    }

    parse
}

fn non_empty(cell: &str) -> Option<String> {
    if cell.is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}
