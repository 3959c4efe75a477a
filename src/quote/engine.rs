//! Deterministic mapping from a policy selection to a premium quote

use super::INSTALLMENT_COUNT;
use crate::policy::PolicySelection;
use crate::rates::RateTable;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Computed premium breakdown for one policy entry
///
/// Amounts are exact decimals, immutable once computed; rounding happens
/// only when a figure is displayed or written out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumQuote {
    /// Premium for the insured vehicles before optional coverages
    pub base_premium: Decimal,
    /// Cost of extra liability coverage, zero when not selected
    pub extra_liability_cost: Decimal,
    /// Cost of glass coverage, zero when not selected
    pub glass_coverage_cost: Decimal,
    /// Cost of loaner car coverage, zero when not selected
    pub loaner_car_cost: Decimal,
    /// Sum of the three optional coverage costs
    pub surcharge_total: Decimal,
    /// Base premium plus surcharges, before tax
    pub pretax_premium: Decimal,
    /// HST on the combined pretax figure
    pub tax_amount: Decimal,
    /// Pretax premium plus tax
    pub total_cost: Decimal,
    /// Per-installment amount over the fixed schedule
    pub monthly_payment: Decimal,
}

/// Calculation engine over a loaded rate table
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    rates: RateTable,
}

impl QuoteEngine {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Premium for `vehicles` before optional coverages.
    ///
    /// The first vehicle pays the full basic premium; each additional
    /// vehicle pays the discounted rate. Grows linearly with no cap.
    /// Callers guarantee `vehicles >= 1`.
    pub fn base_premium(&self, vehicles: u32) -> Decimal {
        let additional = Decimal::from(vehicles - 1);
        self.rates.basic_premium
            + additional * self.rates.basic_premium * (Decimal::ONE - self.rates.discount_rate)
    }

    /// Total of the selected optional coverages.
    ///
    /// Each selected coverage contributes its per-vehicle cost for every
    /// insured vehicle; unselected coverages contribute nothing.
    pub fn surcharge_total(&self, selection: &PolicySelection) -> Decimal {
        let (liability, glass, loaner) = self.coverage_costs(selection);
        liability + glass + loaner
    }

    /// Per-installment payment on the balance left after any down payment.
    ///
    /// The balance plus the processing fee is divided over the fixed
    /// installment schedule for every payment method. A down payment
    /// larger than the total is not rejected here; the caller sees the
    /// resulting negative figure.
    pub fn monthly_payment(&self, total_cost: Decimal, down_payment: Option<Decimal>) -> Decimal {
        let balance = match down_payment {
            Some(down) => total_cost - down,
            None => total_cost,
        };
        (balance + self.rates.monthly_processing_fee) / Decimal::from(INSTALLMENT_COUNT)
    }

    /// Compute the full quote for a selection.
    ///
    /// Tax is applied exactly once, to the combined pretax figure, never
    /// to the base premium and surcharges separately.
    pub fn quote(&self, selection: &PolicySelection) -> PremiumQuote {
        let base_premium = self.base_premium(selection.vehicles);
        let (extra_liability_cost, glass_coverage_cost, loaner_car_cost) =
            self.coverage_costs(selection);
        let surcharge_total = extra_liability_cost + glass_coverage_cost + loaner_car_cost;
        let pretax_premium = base_premium + surcharge_total;
        let tax_amount = pretax_premium * self.rates.tax_rate;
        let total_cost = pretax_premium + tax_amount;
        let monthly_payment = self.monthly_payment(total_cost, selection.down_payment);

        PremiumQuote {
            base_premium,
            extra_liability_cost,
            glass_coverage_cost,
            loaner_car_cost,
            surcharge_total,
            pretax_premium,
            tax_amount,
            total_cost,
            monthly_payment,
        }
    }

    fn coverage_costs(&self, selection: &PolicySelection) -> (Decimal, Decimal, Decimal) {
        let vehicles = Decimal::from(selection.vehicles);
        let cost = |selected: bool, per_vehicle: Decimal| {
            if selected {
                vehicles * per_vehicle
            } else {
                Decimal::ZERO
            }
        };
        (
            cost(selection.extra_liability, self.rates.extra_liability_cost),
            cost(selection.glass_coverage, self.rates.glass_coverage_cost),
            cost(selection.loaner_car, self.rates.loaner_car_cost),
        )
    }
}
