//! Santander's collection rules. The free field leads with the fixed system
//! digit `9`, then the bank-assigned client code (PSK), the 13-digit
//! our-number, the IOS indicator, and the wallet.

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

/// IOS indicator: zero for everything but the insurance products this
/// engine does not issue.
const IOS: char = '0';

pub struct Santander;

impl Santander {
    /// The 7-digit client code (PSK) off the agreement code.
    fn client_code(&self, emitter: &EmitterAccount) -> Result<String> {
        let agreement = banks::require_agreement_code(Institution::Santander, emitter)?;
        if agreement.len() > 7 {
            Err(Error::InvalidAgreementCodeLength(agreement.len()))?;
        }
        util::zpad(agreement, 7)
    }

    /// Sequential number and its mod-11 digit.
    fn sequential_digits(&self, facts: &BilletFacts) -> Result<(String, u8)> {
        let sequential = util::zpad_num(*facts.sequential(), 12)?;
        let digit = checksum::mod11(&sequential, &Mod11Policy::STANDARD)?;
        Ok((sequential, digit))
    }
}

impl BankCodec for Santander {
    fn institution(&self) -> Institution {
        Institution::Santander
    }

    fn build_our_number(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        let (sequential, digit) = self.sequential_digits(facts)?;
        Ok(format!("{}-{}", sequential, digit))
    }

    fn build_free_field(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        let client = self.client_code(emitter)?;
        let (sequential, digit) = self.sequential_digits(facts)?;
        Ok(format!(
            "9{}{}{}{}{}",
            client,
            sequential,
            digit,
            IOS,
            util::zpad(emitter.wallet(), 3)?,
        ))
    }

    fn render_hints(&self, _emitter: &EmitterAccount, _facts: &BilletFacts) -> Result<Vec<(String, String)>> {
        Ok(vec![("ios".into(), IOS.to_string())])
    }
}
