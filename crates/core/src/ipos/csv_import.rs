//! CSV import for IPO records.
//!
//! The source file is a legacy Windows-1252 export: a header row naming the
//! recognized columns, numeric cells that may carry thousands-separator
//! commas, and occasionally a duplicated header row embedded in the data.

use csv::{ReaderBuilder, StringRecord};
use encoding_rs::WINDOWS_1252;
use log::{debug, warn};

use super::ipos_errors::IpoError;
use super::ipos_model::{parse_numeric, NewIpo};
use crate::Result;

// Recognized source columns. Anything else in the header row is ignored.
const COL_DATE: &str = "Date";
const COL_NAME: &str = "IPO_Name";
const COL_ISSUE_SIZE: &str = "Issue_Size(crores)";
const COL_QIB: &str = "QIB";
const COL_HNI: &str = "HNI";
const COL_RII: &str = "RII";
const COL_TOTAL: &str = "Total";
const COL_OFFER_PRICE: &str = "Offer Price";
const COL_LIST_PRICE: &str = "List Price";
const COL_LISTING_GAIN: &str = "Listing Gain";
const COL_CMP_BSE: &str = "CMP(BSE)";
const COL_CMP_NSE: &str = "CMP(NSE)";
const COL_CURRENT_GAINS: &str = "Current Gains";

/// Positions of the mapped columns within the header row.
///
/// A column missing from the header resolves to `None`: required fields then
/// exclude every row, numeric fields read as absent.
#[derive(Debug)]
struct ColumnIndexes {
    date: Option<usize>,
    name: Option<usize>,
    issue_size: Option<usize>,
    qib: Option<usize>,
    hni: Option<usize>,
    rii: Option<usize>,
    total: Option<usize>,
    offer_price: Option<usize>,
    list_price: Option<usize>,
    listing_gain: Option<usize>,
    cmp_bse: Option<usize>,
    cmp_nse: Option<usize>,
    current_gains: Option<usize>,
}

impl ColumnIndexes {
    fn resolve(headers: &StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);
        Self {
            date: position(COL_DATE),
            name: position(COL_NAME),
            issue_size: position(COL_ISSUE_SIZE),
            qib: position(COL_QIB),
            hni: position(COL_HNI),
            rii: position(COL_RII),
            total: position(COL_TOTAL),
            offer_price: position(COL_OFFER_PRICE),
            list_price: position(COL_LIST_PRICE),
            listing_gain: position(COL_LISTING_GAIN),
            cmp_bse: position(COL_CMP_BSE),
            cmp_nse: position(COL_CMP_NSE),
            current_gains: position(COL_CURRENT_GAINS),
        }
    }
}

fn cell<'r>(record: &'r StringRecord, index: Option<usize>) -> Option<&'r str> {
    index.and_then(|i| record.get(i))
}

/// Parses raw Windows-1252 CSV bytes into the records to store.
///
/// Rows whose `Date` or `IPO_Name` cell is missing, empty, or repeats the
/// header literal are skipped silently; malformed numeric cells degrade to
/// absent values. Only an undecodable input or an unreadable header row
/// fails the whole parse.
pub fn parse_ipo_csv(content: &[u8]) -> Result<Vec<NewIpo>> {
    let (decoded, _, had_errors) = WINDOWS_1252.decode(content);
    if had_errors {
        return Err(IpoError::Encoding("input is not valid Windows-1252".to_string()).into());
    }

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(decoded.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| IpoError::Csv(e.to_string()))?
        .clone();
    let columns = ColumnIndexes::resolve(&headers);

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping unreadable CSV record {}: {}", row + 1, e);
                continue;
            }
        };

        let date = cell(&record, columns.date);
        let name = cell(&record, columns.name);

        // The source file sometimes repeats its header row mid-data.
        if date.map(str::trim) == Some(COL_DATE) || name.map(str::trim) == Some(COL_DATE) {
            continue;
        }

        let (date, name) = match (date, name) {
            (Some(date), Some(name)) if !date.is_empty() && !name.is_empty() => (date, name),
            _ => {
                debug!("Skipping row {}: missing Date or IPO_Name", row + 1);
                continue;
            }
        };

        records.push(NewIpo {
            date: date.to_string(),
            name: name.to_string(),
            issue_size: parse_numeric(cell(&record, columns.issue_size)),
            qib_subscription: parse_numeric(cell(&record, columns.qib)),
            hni_subscription: parse_numeric(cell(&record, columns.hni)),
            rii_subscription: parse_numeric(cell(&record, columns.rii)),
            total_subscription: parse_numeric(cell(&record, columns.total)),
            offer_price: parse_numeric(cell(&record, columns.offer_price)),
            list_price: parse_numeric(cell(&record, columns.list_price)),
            listing_gain_pct: parse_numeric(cell(&record, columns.listing_gain)),
            cmp_bse: parse_numeric(cell(&record, columns.cmp_bse)),
            cmp_nse: parse_numeric(cell(&record, columns.cmp_nse)),
            current_gain_pct: parse_numeric(cell(&record, columns.current_gains)),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Date,IPO_Name,Issue_Size(crores),QIB,HNI,RII,Total,Offer Price,List Price,Listing Gain,CMP(BSE),CMP(NSE),Current Gains";

    fn csv(rows: &[&str]) -> Vec<u8> {
        let mut content = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        content.into_bytes()
    }

    #[test]
    fn test_parses_mapped_columns() {
        let content = csv(&[
            "2024-01-01,Acme,\"1,000\",12.5,8.1,2.3,7.9,100,120,20,150.5,151,50.5",
        ]);

        let records = parse_ipo_csv(&content).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.date, "2024-01-01");
        assert_eq!(record.name, "Acme");
        assert_eq!(record.issue_size, Some(1000.0));
        assert_eq!(record.qib_subscription, Some(12.5));
        assert_eq!(record.hni_subscription, Some(8.1));
        assert_eq!(record.rii_subscription, Some(2.3));
        assert_eq!(record.total_subscription, Some(7.9));
        assert_eq!(record.offer_price, Some(100.0));
        assert_eq!(record.list_price, Some(120.0));
        assert_eq!(record.listing_gain_pct, Some(20.0));
        assert_eq!(record.cmp_bse, Some(150.5));
        assert_eq!(record.cmp_nse, Some(151.0));
        assert_eq!(record.current_gain_pct, Some(50.5));
    }

    #[test]
    fn test_skips_embedded_header_row() {
        let content = csv(&[
            "2024-01-01,Acme,100,,,,,,,,,,",
            "Date,IPO_Name,Issue_Size(crores),QIB,HNI,RII,Total,Offer Price,List Price,Listing Gain,CMP(BSE),CMP(NSE),Current Gains",
            "2024-03-01,Date,300,,,,,,,,,,",
            "2024-02-01,Globex,200,,,,,,,,,,",
        ]);

        let records = parse_ipo_csv(&content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Acme");
        assert_eq!(records[1].name, "Globex");
    }

    #[test]
    fn test_skips_rows_missing_required_fields() {
        let content = csv(&[
            ",Acme,100,,,,,,,,,,",
            "2024-01-01,,100,,,,,,,,,,",
            "2024-02-01,Globex,200,,,,,,,,,,",
        ]);

        let records = parse_ipo_csv(&content).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Globex");
    }

    #[test]
    fn test_ignores_unmapped_columns() {
        let content = b"Date,IPO_Name,Symbol,Offer Price\n2024-01-01,Acme,ACME,100".to_vec();

        let records = parse_ipo_csv(&content).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].offer_price, Some(100.0));
        assert_eq!(records[0].issue_size, None);
    }

    #[test]
    fn test_decodes_windows_1252() {
        let mut content = csv(&[]);
        content.extend_from_slice(b"\n2024-01-01,Caf");
        content.push(0xE9);
        content.extend_from_slice(b" Foods,500,,,,,,,,,,");

        let records = parse_ipo_csv(&content).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Caf\u{e9} Foods");
        assert_eq!(records[0].issue_size, Some(500.0));
    }

    #[test]
    fn test_malformed_numeric_cells_degrade_to_absent() {
        let content = csv(&["2024-01-01,Acme,N/A,--,  ,,,100,,,,,"]);

        let records = parse_ipo_csv(&content).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].issue_size, None);
        assert_eq!(records[0].qib_subscription, None);
        assert_eq!(records[0].hni_subscription, None);
        assert_eq!(records[0].offer_price, Some(100.0));
    }

    #[test]
    fn test_empty_file_with_header_yields_no_records() {
        let records = parse_ipo_csv(&csv(&[])).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_accepts_one_of_two_rows() {
        let content = csv(&[
            "2024-01-01,Acme,\"1,000\",,,,,100,120,,,,",
            ",Globex,200,,,,,,,,,,",
        ]);

        let records = parse_ipo_csv(&content).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.issue_size, Some(1000.0));
        assert_eq!(record.offer_price, Some(100.0));
        assert_eq!(record.list_price, Some(120.0));
        assert_eq!(record.qib_subscription, None);
        assert_eq!(record.total_subscription, None);
        assert_eq!(record.listing_gain_pct, None);
        assert_eq!(record.cmp_bse, None);
        assert_eq!(record.current_gain_pct, None);
    }
}
