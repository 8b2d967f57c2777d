//! Banrisul's collection rules. Both the our-number and the free field end
//! in the double check digit pair: mod-10 first, then mod-11 with the
//! remainder-1 retry that increments the first digit and recomputes.

use crate::{
    banks::{self, BankCodec, Institution},
    checksum,
    error::{Error, Result},
    models::{
        billet::BilletFacts,
        emitter::EmitterAccount,
    },
    util,
};

/// Fixed free-field positions: the system constant after the product digit
/// and the "40" marker before the check digit pair.
const SYSTEM: char = '1';
const MARKER: &str = "40";

pub struct Banrisul;

impl Banrisul {
    /// The 7-digit assignor code off the agreement code.
    fn assignor_code(&self, emitter: &EmitterAccount) -> Result<String> {
        let agreement = banks::require_agreement_code(Institution::Banrisul, emitter)?;
        if agreement.len() > 7 {
            Err(Error::InvalidAgreementCodeLength(agreement.len()))?;
        }
        util::zpad(agreement, 7)
    }
}

impl BankCodec for Banrisul {
    fn institution(&self) -> Institution {
        Institution::Banrisul
    }

    fn build_our_number(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        let sequential = util::zpad_num(*facts.sequential(), 8)?;
        let (first, second) = checksum::double_check_digits(&sequential)?;
        Ok(format!("{}-{}{}", sequential, first, second))
    }

    fn build_free_field(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        let payload = format!(
            "{}{}{}{}{}{}",
            emitter.wallet(),
            SYSTEM,
            util::zpad(emitter.agency(), 4)?,
            self.assignor_code(emitter)?,
            util::zpad_num(*facts.sequential(), 8)?,
            MARKER,
        );
        let (first, second) = checksum::double_check_digits(&payload)?;
        Ok(format!("{}{}{}", payload, first, second))
    }
}
