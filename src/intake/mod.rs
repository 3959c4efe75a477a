//! Interactive field collection for a policy entry
//!
//! Validation lives in `policy::validate` as pure predicates; this layer
//! owns the prompt/retry loops and never lets an invalid token past a
//! field. Invalid input re-prompts only its own field and cannot corrupt
//! already-accepted values.

use crate::policy::validate;
use crate::policy::{Claim, Customer, PaymentMethod, PolicySelection};
use log::debug;
use std::io::{self, BufRead, Write};

/// One interactive entry session over arbitrary input/output streams
///
/// Parameterized over the streams so sessions can be driven from scripted
/// input in tests.
pub struct IntakeSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> IntakeSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Collect the customer identity block. Names and city are
    /// title-cased; the province is re-prompted until valid.
    pub fn read_customer(&mut self) -> io::Result<Customer> {
        let first_name = title_case(&self.prompt("Enter customer's first name: ")?);
        let last_name = title_case(&self.prompt("Enter customer's last name: ")?);
        let address = self.prompt("Enter customer's address: ")?;
        let city = title_case(&self.prompt("Enter customer's city: ")?);
        let province = self.prompt_until(
            "Enter customer's province: ",
            "Invalid province. Valid codes: ON, QC, BC, AB, MB, SK, NS, NB, NL, PE, NT, NU, YT.",
            validate::parse_province,
        )?;
        let postal_code = self.prompt("Enter customer's postal code: ")?;
        let phone_number = self.prompt("Enter customer's phone number: ")?;
        Ok(Customer {
            first_name,
            last_name,
            address,
            city,
            province,
            postal_code,
            phone_number,
        })
    }

    /// Collect the insurance selections. The down payment is collected
    /// only when the Down Pay method is chosen.
    pub fn read_selection(&mut self) -> io::Result<PolicySelection> {
        let vehicles = self.prompt_until(
            "Enter number of vehicles being insured: ",
            "Invalid input! Please enter a whole number of at least 1.",
            validate::parse_vehicle_count,
        )?;
        let extra_liability = self.read_yes_no("Extra liability coverage (Y/N): ")?;
        let glass_coverage = self.read_yes_no("Glass coverage (Y/N): ")?;
        let loaner_car = self.read_yes_no("Loaner car coverage (Y/N): ")?;
        let payment = self.prompt_until(
            "Payment method (Full/Monthly/Down Pay): ",
            "Invalid input! Please enter Full, Monthly, or Down Pay.",
            validate::parse_payment_method,
        )?;
        let down_payment = if payment == PaymentMethod::DownPay {
            Some(self.prompt_until(
                "Enter down payment amount: ",
                "Invalid input! Please enter a non-negative amount.",
                validate::parse_money,
            )?)
        } else {
            None
        };
        Ok(PolicySelection {
            vehicles,
            extra_liability,
            glass_coverage,
            loaner_car,
            payment,
            down_payment,
        })
    }

    /// Collect prior claims until the operator enters `done`.
    pub fn read_claims(&mut self) -> io::Result<Vec<Claim>> {
        let mut claims = Vec::new();
        loop {
            let number = self.prompt("Enter claim number (or 'done' to finish): ")?;
            if number.eq_ignore_ascii_case("done") {
                break;
            }
            let date = self.prompt("Enter claim date: ")?;
            let amount = self.prompt_until(
                "Enter claim amount: ",
                "Invalid input! Please enter a non-negative amount.",
                validate::parse_money,
            )?;
            claims.push(Claim { number, date, amount });
        }
        debug!("collected {} prior claims", claims.len());
        Ok(claims)
    }

    /// Yes/no confirmation, re-prompted until a valid token arrives.
    pub fn confirm(&mut self, message: &str) -> io::Result<bool> {
        self.read_yes_no(message)
    }

    /// Print a line to the operator.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    fn read_yes_no(&mut self, message: &str) -> io::Result<bool> {
        self.prompt_until(
            message,
            "Invalid input! Please enter Y or N.",
            validate::parse_yes_no,
        )
    }

    fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Re-prompt with `error` until `parse` accepts the token.
    fn prompt_until<T>(
        &mut self,
        message: &str,
        error: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<T> {
        loop {
            let token = self.prompt(message)?;
            match parse(&token) {
                Some(value) => return Ok(value),
                None => writeln!(self.output, "{error}")?,
            }
        }
    }
}

/// Title-case a free-text field the way names and cities are stored:
/// every letter that follows a non-letter is uppercased, the rest are
/// lowercased.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
