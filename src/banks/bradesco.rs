//! Bradesco's collection rules. The our-number display digit is the odd one
//! out in the registry: mod-11 with weights capped at 7, computed over
//! wallet + sequential, and a remainder of 1 prints as `P`.

use crate::{
    banks::{self, BankCodec, Institution},
    checksum,
    error::Result,
    models::{
        billet::BilletFacts,
        computed::ParsedFreeField,
        emitter::EmitterAccount,
    },
    util,
};

pub struct Bradesco;

impl Bradesco {
    /// Mod-11 display digit, weights capped at 7, over wallet + sequential.
    fn display_digit(&self, wallet: &str, sequential: &str) -> Result<char> {
        let digit = match checksum::mod11_remainder(&format!("{}{}", wallet, sequential), 7)? {
            0 => '0',
            1 => 'P',
            rem => (b'0' + (11 - rem) as u8) as char,
        };
        Ok(digit)
    }
}

impl BankCodec for Bradesco {
    fn institution(&self) -> Institution {
        Institution::Bradesco
    }

    fn build_our_number(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        let wallet = util::zpad(emitter.wallet(), 2)?;
        let sequential = util::zpad_num(*facts.sequential(), 11)?;
        let digit = self.display_digit(&wallet, &sequential)?;
        Ok(format!("{}/{}-{}", wallet, sequential, digit))
    }

    fn build_free_field(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        Ok(format!(
            "{}{}{}{}0",
            util::zpad(emitter.agency(), 4)?,
            util::zpad(emitter.wallet(), 2)?,
            util::zpad_num(*facts.sequential(), 11)?,
            util::zpad(emitter.account(), 7)?,
        ))
    }

    fn parse_free_field(&self, free_field: &str) -> Option<ParsedFreeField> {
        if free_field.len() != 25 || !free_field.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(ParsedFreeField {
            agency: Some(free_field[0..4].into()),
            wallet: Some(free_field[4..6].into()),
            sequential: Some(free_field[6..17].into()),
            account: Some(free_field[17..24].into()),
            ..Default::default()
        })
    }
}
