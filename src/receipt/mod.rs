//! Receipt rendering for completed policy entries
//!
//! Layout is a presentation concern; the content carries everything the
//! customer copy needs: identity, coverages with their costs, totals, the
//! payment schedule, and the claims history.

use crate::quote::format_money;
use crate::rates::RateTable;
use crate::records::PolicyRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Render the customer copy of a completed record.
pub fn render(record: &PolicyRecord, rates: &RateTable) -> String {
    let customer = &record.customer;
    let selection = &record.selection;
    let quote = &record.quote;
    let mut out = String::new();

    out.push_str("========================================================\n");
    out.push_str("              One Stop Insurance Company\n");
    out.push_str("             --INSURANCE POLICY RECEIPT--\n");
    out.push_str("                    CUSTOMER COPY\n");
    out.push_str("========================================================\n\n");

    out.push_str(&format!("Invoice Date:  {}\n", record.invoice_date));
    out.push_str(&format!("Policy Number: {}\n\n", record.policy_number));

    out.push_str(&format!("{} {}\n", customer.first_name, customer.last_name));
    out.push_str(&format!("{}\n", customer.address));
    out.push_str(&format!(
        "{}, {}, {}\n",
        customer.city, customer.province, customer.postal_code
    ));
    out.push_str(&format!("{}\n\n", format_phone(&customer.phone_number)));

    out.push_str(&format!(
        "Number of Vehicles Insured:          {}\n",
        selection.vehicles
    ));
    out.push_str(&format!(
        "Payment Option Selected:             {}\n",
        selection.payment
    ));
    match selection.down_payment {
        Some(down) => out.push_str(&format!(
            "Down Payment:                        {}\n",
            format_money(down)
        )),
        None => out.push_str("Down Payment:                        None\n"),
    }

    out.push_str("\nAdditional Coverage Options:\n");
    out.push_str(&coverage_line(
        "Extra Liability Coverage",
        selection.extra_liability,
        quote.extra_liability_cost,
    ));
    out.push_str(&coverage_line(
        "Glass Coverage",
        selection.glass_coverage,
        quote.glass_coverage_cost,
    ));
    out.push_str(&coverage_line(
        "Loaner Car Coverage",
        selection.loaner_car,
        quote.loaner_car_cost,
    ));

    out.push_str("--------------------------------------------------------\n");
    out.push_str(&format!(
        "Total Insurance Premium (Pretax):    {}\n",
        format_money(quote.pretax_premium)
    ));
    out.push_str(&format!(
        "Taxes (HST {}%):                      {}\n",
        tax_percent(rates.tax_rate),
        format_money(quote.tax_amount)
    ));
    out.push_str("--------------------------------------------------------\n");
    out.push_str(&format!(
        "Total Amount (including taxes):      {}\n\n",
        format_money(quote.total_cost)
    ));

    out.push_str(&format!(
        "Monthly Payment:                     {}\n",
        format_money(quote.monthly_payment)
    ));
    out.push_str(&format!(
        "First Payment Date:                  {}\n",
        record.first_payment_date
    ));

    if record.claims.is_empty() {
        out.push_str("\nCustomer has no previous claims.\n");
    } else {
        out.push_str("\nPrevious Claims:\n");
        out.push_str(&format!("  {:<14} {:<14} {}\n", "Claim #", "Claim Date", "Amount"));
        out.push_str("  ----------------------------------------\n");
        for claim in &record.claims {
            out.push_str(&format!(
                "  {:<14} {:<14} {}\n",
                claim.number,
                claim.date,
                format_money(claim.amount)
            ));
        }
    }

    out
}

fn coverage_line(label: &str, selected: bool, cost: Decimal) -> String {
    format!(
        "  {:<27} {:<4} Cost: {}\n",
        format!("{label}:"),
        if selected { "Yes" } else { "No" },
        format_money(cost)
    )
}

fn tax_percent(rate: Decimal) -> Decimal {
    (rate * dec!(100)).normalize()
}

/// Format a ten-digit phone number as (xxx)-xxx-xxxx; anything else is
/// printed verbatim.
fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 && digits.len() == raw.trim().len() {
        format!("({})-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Claim, Customer, PaymentMethod, PolicySelection, Province};
    use crate::quote::QuoteEngine;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn sample_record(claims: Vec<Claim>, down_payment: Option<Decimal>) -> PolicyRecord {
        let customer = Customer {
            first_name: "Christian".to_string(),
            last_name: "Rose".to_string(),
            address: "45 Elizabeth Ave".to_string(),
            city: "Corner Brook".to_string(),
            province: Province::Nl,
            postal_code: "A2H6J8".to_string(),
            phone_number: "7095557766".to_string(),
        };
        let payment = if down_payment.is_some() {
            PaymentMethod::DownPay
        } else {
            PaymentMethod::Monthly
        };
        let selection = PolicySelection {
            vehicles: 3,
            extra_liability: true,
            glass_coverage: false,
            loaner_car: true,
            payment,
            down_payment,
        };
        let quote = QuoteEngine::new(RateTable::default()).quote(&selection);
        let invoice_date = NaiveDate::from_ymd_opt(2024, 7, 22).unwrap();
        PolicyRecord::new(1950, customer, selection, claims, quote, invoice_date)
    }

    #[test]
    fn test_receipt_contains_required_content() {
        let claims = vec![Claim {
            number: "C-2040".to_string(),
            date: "2022-11-02".to_string(),
            amount: dec!(1200),
        }];
        let record = sample_record(claims, None);
        let receipt = render(&record, &RateTable::default());

        assert!(receipt.contains("Policy Number: 1950"));
        assert!(receipt.contains("Invoice Date:  2024-07-22"));
        assert!(receipt.contains("Christian Rose"));
        assert!(receipt.contains("45 Elizabeth Ave"));
        assert!(receipt.contains("Corner Brook, NL, A2H6J8"));
        assert!(receipt.contains("(709)-555-7766"));
        assert!(receipt.contains("Number of Vehicles Insured:          3"));
        assert!(receipt.contains("Payment Option Selected:             Monthly"));
        assert!(receipt.contains("Down Payment:                        None"));
        assert!(receipt.contains("Extra Liability Coverage:"));
        assert!(receipt.contains("Total Insurance Premium (Pretax):"));
        assert!(receipt.contains("Taxes (HST 15%):"));
        assert!(receipt.contains("Total Amount (including taxes):"));
        assert!(receipt.contains("Monthly Payment:"));
        assert!(receipt.contains("First Payment Date:                  2024-08-01"));
        assert!(receipt.contains("C-2040"));
        assert!(receipt.contains("$1200.00"));
    }

    #[test]
    fn test_receipt_shows_individual_coverage_costs() {
        let record = sample_record(Vec::new(), None);
        let receipt = render(&record, &RateTable::default());

        // 3 vehicles: liability 3 x $130, loaner 3 x $58, glass unselected
        assert!(receipt.contains("Extra Liability Coverage:   Yes  Cost: $390.00"));
        assert!(receipt.contains("Glass Coverage:             No   Cost: $0.00"));
        assert!(receipt.contains("Loaner Car Coverage:        Yes  Cost: $174.00"));
    }

    #[test]
    fn test_receipt_without_claims_says_so() {
        let record = sample_record(Vec::new(), None);
        let receipt = render(&record, &RateTable::default());
        assert!(receipt.contains("Customer has no previous claims."));
        assert!(!receipt.contains("Previous Claims:"));
    }

    #[test]
    fn test_receipt_shows_down_payment() {
        let record = sample_record(Vec::new(), Some(dec!(500)));
        let receipt = render(&record, &RateTable::default());
        assert!(receipt.contains("Down Payment:                        $500.00"));
        assert!(receipt.contains("Payment Option Selected:             Down Pay"));
    }

    #[test]
    fn test_phone_formatting() {
        assert_eq!(format_phone("7095551234"), "(709)-555-1234");
        assert_eq!(format_phone("555-1234"), "555-1234");
        assert_eq!(format_phone(""), "");
    }
}
