//! Rate-sheet import against a catalog store.

use crate::catalog::CatalogStore;
use presswire_commerce::import::{parse_sheet, ImportReport, RowError, SheetParse, SheetRow};
use presswire_commerce::money::Currency;

/// Parse a rate sheet and upsert its rows into the store.
///
/// Import is row-by-row: a row that fails to parse or to upsert is recorded
/// in the report and the remaining rows proceed. The returned report carries
/// the final total/imported/skipped/error counts.
pub async fn import_sheet<S: CatalogStore>(
    store: &S,
    data: &str,
    currency: Currency,
) -> ImportReport {
    let SheetParse { rows, mut report } = parse_sheet(data, currency);

    for SheetRow { row, draft } in rows {
        let name = draft.name.clone();
        match store.upsert_by_name(draft).await {
            Ok(_) => report.imported += 1,
            Err(e) => {
                tracing::warn!(row, name = %name, error = %e, "rate-sheet row failed to upsert");
                report.errors.push(RowError {
                    row,
                    name: Some(name),
                    message: e.to_string(),
                });
            }
        }
    }

    report
}
