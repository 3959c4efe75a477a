//! Interactive policy intake for One Stop Insurance
//!
//! Prompts for customer and coverage details, computes the premium quote,
//! appends the completed record to the flat log, and prints the receipt.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use policy_intake::intake::IntakeSession;
use policy_intake::policy::PolicyNumberAllocator;
use policy_intake::quote::QuoteEngine;
use policy_intake::rates::load_rates;
use policy_intake::receipt;
use policy_intake::records::{PolicyRecord, RecordWriter};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    about = "Interactive policy intake and premium quoting for One Stop Insurance",
    version
)]
struct Cli {
    /// Rates CSV file; startup fails if it is missing or incomplete
    #[arg(long, default_value = "rates.csv")]
    rates: PathBuf,

    /// Append-only policy record log
    #[arg(long, default_value = "policy_records.dat")]
    records: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rates = load_rates(&cli.rates).with_context(|| {
        format!(
            "cannot start without a complete rate table ({})",
            cli.rates.display()
        )
    })?;
    let engine = QuoteEngine::new(rates.clone());
    let mut allocator = PolicyNumberAllocator::new(rates.next_policy_number);
    let writer = RecordWriter::new(&cli.records);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = IntakeSession::new(stdin.lock(), stdout.lock());

    session.say("Welcome to One Stop Insurance Company")?;

    loop {
        let customer = session.read_customer()?;
        let selection = session.read_selection()?;
        let claims = session.read_claims()?;

        let quote = engine.quote(&selection);
        // The policy number is consumed only once entry has completed;
        // a cancelled session never advances the counter.
        let policy_number = allocator.allocate();
        let invoice_date = chrono::Local::now().date_naive();
        let record = PolicyRecord::new(
            policy_number,
            customer,
            selection,
            claims,
            quote,
            invoice_date,
        );
        info!(
            "policy {} entered for {} {}",
            record.policy_number, record.customer.first_name, record.customer.last_name
        );

        // The record stays in memory across failed writes so the operator
        // can retry without re-entering anything.
        loop {
            match writer.append(&record) {
                Ok(()) => {
                    session.say("Policy data saved.")?;
                    break;
                }
                Err(err) => {
                    warn!("record write failed: {err}");
                    session.say(&format!("Could not save the record: {err}"))?;
                    if !session.confirm("Retry saving? (Y/N): ")? {
                        session.say("Record was NOT saved.")?;
                        break;
                    }
                }
            }
        }

        session.say(&receipt::render(&record, &rates))?;

        if !session.confirm("Do you want to enter another customer? (Y/N): ")? {
            break;
        }
    }

    info!("next unassigned policy number: {}", allocator.peek());
    session.say("Customer information has been successfully recorded.")?;
    Ok(())
}
