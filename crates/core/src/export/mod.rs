//! CSV export of the review surfaces.
//!
//! Two fixed layouts: the unified feed export and the claims-only legacy
//! export. Header rows and column order are part of the contract with
//! downstream consumers and must not change.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::entity::Claim;
use crate::feed::ApprovalItem;
use crate::format::LocaleFormat;

/// Column order of the unified feed export.
pub const FEED_HEADER: [&str; 6] = ["ID", "Requester", "Category", "Date", "Amount", "Status"];

/// Column order of the claims-only export. "Employee" is kept for
/// compatibility with existing consumers.
pub const CLAIMS_HEADER: [&str; 6] = ["ID", "Employee", "Category", "Date", "Amount", "Status"];

/// Errors produced while writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The underlying CSV writer failed.
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the in-memory buffer failed.
    #[error("csv flush failed: {0}")]
    Io(#[from] std::io::Error),

    /// The writer emitted bytes that are not valid UTF-8.
    #[error("export produced invalid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Renders the given feed slice as CSV, one row per item in feed order.
///
/// Amounts and dates go through the locale formatter; a missing amount
/// exports as the formatted zero. Quoting follows RFC 4180 (the writer
/// quotes only where needed).
pub fn export_feed_csv(
    items: &[ApprovalItem<'_>],
    fmt: &dyn LocaleFormat,
) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(FEED_HEADER)?;
    for item in items {
        let date = fmt.date(item.date);
        let amount = fmt.amount(item.amount.unwrap_or(Decimal::ZERO));
        writer.write_record([
            item.id.original.as_str(),
            item.requester_name.as_str(),
            item.source.category(),
            date.as_str(),
            amount.as_str(),
            item.status,
        ])?;
    }
    finish(writer)
}

/// Renders a claims slice in the legacy claims layout.
pub fn export_claims_csv(claims: &[Claim], fmt: &dyn LocaleFormat) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CLAIMS_HEADER)?;
    for claim in claims {
        let date = fmt.date(claim.date);
        let amount = fmt.amount(claim.amount.unwrap_or(Decimal::ZERO));
        writer.write_record([
            claim.id.as_str(),
            claim.requester.name.as_str(),
            claim.category.as_str(),
            date.as_str(),
            amount.as_str(),
            claim.status.as_str(),
        ])?;
    }
    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{ClaimStatus, Requester};
    use crate::feed::build_feed;
    use crate::format::EnUs;
    use crate::policy::PolicyEvaluator;
    use crate::store::{Collections, EntityStore};
    use chrono::NaiveDate;
    use opsdesk_shared::types::UserId;
    use rust_decimal_macros::dec;

    fn claim(id: &str, who: &str, amount: Option<Decimal>) -> Claim {
        Claim {
            id: id.into(),
            requester: Requester::new(UserId::new(), who),
            category: "Travel".to_string(),
            description: "Client visit".to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            status: ClaimStatus::Submitted,
            approval_date: None,
            approval_notes: None,
            rejection_reason: None,
            policy_warning: None,
        }
    }

    #[test]
    fn test_feed_header_is_byte_exact() {
        let collections = Collections {
            claims: EntityStore::new(vec![claim("CLM-1", "Bob Smith", Some(dec!(100)))]),
            ..Collections::default()
        };
        let feed = build_feed(&collections, &PolicyEvaluator::default(), &EnUs);
        let out = export_feed_csv(&feed, &EnUs).unwrap();
        assert_eq!(
            out.lines().next(),
            Some("ID,Requester,Category,Date,Amount,Status")
        );
    }

    #[test]
    fn test_feed_rows_follow_feed_order() {
        let collections = Collections {
            claims: EntityStore::new(vec![
                claim("CLM-1", "Bob Smith", Some(dec!(100))),
                claim("CLM-2", "Ana Diaz", None),
            ]),
            ..Collections::default()
        };
        let feed = build_feed(&collections, &PolicyEvaluator::default(), &EnUs);
        let out = export_feed_csv(&feed, &EnUs).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "CLM-1,Bob Smith,Travel,03/10/2025,$100.00,submitted");
        // Missing amount exports as the formatted zero.
        assert_eq!(lines[2], "CLM-2,Ana Diaz,Travel,03/10/2025,$0.00,submitted");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let collections = Collections {
            claims: EntityStore::new(vec![claim("CLM-1", "Smith, Bob", Some(dec!(1500)))]),
            ..Collections::default()
        };
        let feed = build_feed(&collections, &PolicyEvaluator::default(), &EnUs);
        let out = export_feed_csv(&feed, &EnUs).unwrap();
        let row = out.lines().nth(1).unwrap();
        assert!(row.contains("\"Smith, Bob\""));
        assert!(row.contains("\"$1,500.00\""));
    }

    #[test]
    fn test_claims_export_keeps_legacy_employee_column() {
        let claims = vec![claim("CLM-7", "Kim Osei", Some(dec!(42.5)))];
        let out = export_claims_csv(&claims, &EnUs).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "ID,Employee,Category,Date,Amount,Status");
        assert_eq!(lines[1], "CLM-7,Kim Osei,Travel,03/10/2025,$42.50,submitted");
    }
}
