//! HSBC's not-registered collection rules (CNR). The only codec whose free
//! field encodes the due date itself: a julian day-of-year plus the last
//! digit of the year, alongside the assignor code and the sequential
//! number.

use crate::{
    banks::{self, BankCodec, Institution},
    checksum::{self, Mod11Policy},
    error::{Error, Result},
    models::{
        billet::BilletFacts,
        emitter::EmitterAccount,
    },
    util,
};
use chrono::Datelike;

/// CNR application code, last position of the free field.
const APPLICATION: char = '2';

pub struct Hsbc;

impl Hsbc {
    /// The 7-digit assignor code off the agreement code.
    fn assignor_code(&self, emitter: &EmitterAccount) -> Result<String> {
        let agreement = banks::require_agreement_code(Institution::Hsbc, emitter)?;
        if agreement.len() > 7 {
            Err(Error::InvalidAgreementCodeLength(agreement.len()))?;
        }
        util::zpad(agreement, 7)
    }

    /// Julian due date: day of year (3 digits) + last digit of the year.
    fn julian_due_date(&self, facts: &BilletFacts) -> Result<String> {
        let due = facts.due_date();
        Ok(format!("{:03}{}", due.ordinal(), due.year() % 10))
    }
}

impl BankCodec for Hsbc {
    fn institution(&self) -> Institution {
        Institution::Hsbc
    }

    /// CNR "type 4" our-number: sequential + first mod-11 digit + the type
    /// digit + a second mod-11 digit chaining in the due date and assignor
    /// code.
    fn build_our_number(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        let sequential = facts.sequential().to_string();
        let first = checksum::mod11(&sequential, &Mod11Policy::STANDARD)?;
        let chained = format!(
            "{}{}4{}{}",
            sequential,
            first,
            facts.due_date().format("%d%m%y"),
            self.assignor_code(emitter)?,
        );
        let second = checksum::mod11(&chained, &Mod11Policy::STANDARD)?;
        Ok(format!("{}{}4{}", sequential, first, second))
    }

    fn build_free_field(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        Ok(format!(
            "{}{}{}{}",
            self.assignor_code(emitter)?,
            util::zpad_num(*facts.sequential(), 13)?,
            self.julian_due_date(facts)?,
            APPLICATION,
        ))
    }
}
