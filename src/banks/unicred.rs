//! Unicred's collection rules: the simplest layout in the registry. The
//! our-number is the zero-padded sequential number with one mod-11 check
//! digit, and the free field is agency, account, and our-number laid end to
//! end.

use crate::{
    banks::{self, BankCodec, Institution},
    checksum::{self, Mod11Policy},
    error::Result,
    models::{
        billet::BilletFacts,
        computed::ParsedFreeField,
        emitter::EmitterAccount,
    },
    util,
};

pub struct Unicred;

impl Unicred {
    /// Sequential number and its mod-11 digit, the underlying digits shared
    /// by both the our-number and the free field.
    fn sequential_digits(&self, facts: &BilletFacts) -> Result<(String, u8)> {
        let sequential = util::zpad_num(*facts.sequential(), 10)?;
        let digit = checksum::mod11(&sequential, &Mod11Policy::STANDARD)?;
        Ok((sequential, digit))
    }
}

impl BankCodec for Unicred {
    fn institution(&self) -> Institution {
        Institution::Unicred
    }

    fn build_our_number(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        let (sequential, digit) = self.sequential_digits(facts)?;
        Ok(format!("{}-{}", sequential, digit))
    }

    fn build_free_field(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        let (sequential, digit) = self.sequential_digits(facts)?;
        Ok(format!(
            "{}{}{}{}",
            util::zpad(emitter.agency(), 4)?,
            util::zpad(emitter.account(), 10)?,
            sequential,
            digit,
        ))
    }

    fn parse_free_field(&self, free_field: &str) -> Option<ParsedFreeField> {
        if free_field.len() != 25 || !free_field.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(ParsedFreeField {
            agency: Some(free_field[0..4].into()),
            account: Some(free_field[4..14].into()),
            sequential: Some(free_field[14..24].into()),
            ..Default::default()
        })
    }
}
