//! Completed policy records and the append-only record log

use crate::policy::{Claim, Customer, PolicySelection};
use crate::quote::{format_money, PremiumQuote};
use chrono::{Datelike, NaiveDate};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to write record log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A completed customer entry, immutable once assembled
///
/// Both the record log and the receipt render from this same structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub policy_number: u32,
    pub customer: Customer,
    pub selection: PolicySelection,
    pub claims: Vec<Claim>,
    pub quote: PremiumQuote,
    pub invoice_date: NaiveDate,
    pub first_payment_date: NaiveDate,
}

impl PolicyRecord {
    /// Assemble a record. The first payment falls on the first day of the
    /// month after the invoice date.
    pub fn new(
        policy_number: u32,
        customer: Customer,
        selection: PolicySelection,
        claims: Vec<Claim>,
        quote: PremiumQuote,
        invoice_date: NaiveDate,
    ) -> Self {
        let first_payment_date = first_of_next_month(invoice_date);
        Self {
            policy_number,
            customer,
            selection,
            claims,
            quote,
            invoice_date,
            first_payment_date,
        }
    }
}

/// First day of the month after `date`, rolling December into January of
/// the next year.
pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of a month is always a valid date")
}

/// Append-only writer for the flat record log
#[derive(Debug, Clone)]
pub struct RecordWriter {
    path: PathBuf,
}

impl RecordWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record block, creating the log on first use.
    ///
    /// The record stays with the caller, so a failed write can be retried
    /// without re-collecting any input.
    pub fn append(&self, record: &PolicyRecord) -> Result<(), RecordError> {
        let block = format_record(record);
        let io_err = |source| RecordError::Io {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;
        file.write_all(block.as_bytes()).map_err(io_err)?;
        info!(
            "appended policy {} to {}",
            record.policy_number,
            self.path.display()
        );
        Ok(())
    }
}

/// Render one record as the block appended to the log.
pub fn format_record(record: &PolicyRecord) -> String {
    let customer = &record.customer;
    let selection = &record.selection;
    let quote = &record.quote;
    let mut out = String::new();

    out.push_str(&format!("Policy Number: {}\n", record.policy_number));
    out.push_str(&format!("Invoice Date: {}\n", record.invoice_date));
    out.push_str(&format!(
        "Customer: {} {}\n",
        customer.first_name, customer.last_name
    ));
    out.push_str(&format!(
        "Address: {}, {}, {}, {}\n",
        customer.address, customer.city, customer.province, customer.postal_code
    ));
    out.push_str(&format!("Phone Number: {}\n", customer.phone_number));
    out.push_str(&format!("Number of Vehicles: {}\n", selection.vehicles));
    out.push_str(&format!(
        "Extra Liability Coverage: {}\n",
        yes_no(selection.extra_liability)
    ));
    out.push_str(&format!("Glass Coverage: {}\n", yes_no(selection.glass_coverage)));
    out.push_str(&format!("Loaner Car Coverage: {}\n", yes_no(selection.loaner_car)));
    out.push_str(&format!("Payment Method: {}\n", selection.payment));
    if let Some(down) = selection.down_payment {
        out.push_str(&format!("Down Payment: {}\n", format_money(down)));
    }
    out.push_str(&format!(
        "Total Insurance Premium (Pretax): {}\n",
        format_money(quote.pretax_premium)
    ));
    out.push_str(&format!(
        "Total Amount (including taxes): {}\n",
        format_money(quote.total_cost)
    ));
    out.push_str(&format!(
        "Monthly Payment: {}\n",
        format_money(quote.monthly_payment)
    ));
    out.push_str("Claims:\n");
    if record.claims.is_empty() {
        out.push_str("    None\n");
    } else {
        for claim in &record.claims {
            out.push_str(&format!(
                "    Claim Number: {}, Claim Date: {}, Amount: {}\n",
                claim.number,
                claim.date,
                format_money(claim.amount)
            ));
        }
    }
    out.push_str("============================================================\n");
    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{PaymentMethod, Province};
    use crate::quote::QuoteEngine;
    use crate::rates::RateTable;
    use rust_decimal_macros::dec;
    use std::fs;

    fn sample_record(policy_number: u32, claims: Vec<Claim>) -> PolicyRecord {
        let customer = Customer {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            address: "12 Water St".to_string(),
            city: "St. John's".to_string(),
            province: Province::Nl,
            postal_code: "A1C5H7".to_string(),
            phone_number: "7095551234".to_string(),
        };
        let selection = PolicySelection {
            vehicles: 2,
            extra_liability: true,
            glass_coverage: false,
            loaner_car: true,
            payment: PaymentMethod::Monthly,
            down_payment: None,
        };
        let quote = QuoteEngine::new(RateTable::default()).quote(&selection);
        let invoice_date = NaiveDate::from_ymd_opt(2024, 7, 22).unwrap();
        PolicyRecord::new(policy_number, customer, selection, claims, quote, invoice_date)
    }

    fn temp_log(test: &str) -> PathBuf {
        std::env::temp_dir().join(format!("policy_records_{}_{}.dat", test, std::process::id()))
    }

    #[test]
    fn test_first_payment_is_first_of_next_month() {
        let mid_month = NaiveDate::from_ymd_opt(2024, 7, 22).unwrap();
        assert_eq!(
            first_of_next_month(mid_month),
            NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
        );
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let december = NaiveDate::from_ymd_opt(2024, 12, 3).unwrap();
        assert_eq!(
            first_of_next_month(december),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_record_block_contents() {
        let claims = vec![Claim {
            number: "C-1021".to_string(),
            date: "2023-05-14".to_string(),
            amount: dec!(850.25),
        }];
        let block = format_record(&sample_record(1944, claims));

        assert!(block.contains("Policy Number: 1944"));
        assert!(block.contains("Customer: Jane Doe"));
        assert!(block.contains("Address: 12 Water St, St. John's, NL, A1C5H7"));
        assert!(block.contains("Number of Vehicles: 2"));
        assert!(block.contains("Extra Liability Coverage: Yes"));
        assert!(block.contains("Glass Coverage: No"));
        assert!(block.contains("Payment Method: Monthly"));
        assert!(block.contains("Claim Number: C-1021, Claim Date: 2023-05-14, Amount: $850.25"));
    }

    #[test]
    fn test_record_block_with_no_claims() {
        let block = format_record(&sample_record(2000, Vec::new()));
        assert!(block.contains("Claims:\n    None"));
    }

    #[test]
    fn test_appends_preserve_order() {
        let path = temp_log("order");
        let _ = fs::remove_file(&path);

        let writer = RecordWriter::new(&path);
        writer.append(&sample_record(100, Vec::new())).unwrap();
        writer.append(&sample_record(101, Vec::new())).unwrap();

        let log = fs::read_to_string(&path).unwrap();
        let first = log.find("Policy Number: 100").unwrap();
        let second = log.find("Policy Number: 101").unwrap();
        assert!(first < second);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_append_failure_reports_path() {
        let writer = RecordWriter::new("/nonexistent-dir/records.dat");
        let err = writer.append(&sample_record(1, Vec::new())).unwrap_err();
        assert!(err.to_string().contains("/nonexistent-dir/records.dat"));
    }
}
