//! Banco Safra's collection rules. Safra is the registry's example of the
//! other mod-11 school: a remainder of 0 maps to check digit 1, a remainder
//! of 1 to check digit 0. The free field is framed by the fixed system
//! digit `7` and collection-type digit `2`.

use crate::{
    banks::{self, BankCodec, Institution},
    checksum::{self, Mod11Policy},
    error::Result,
    models::{
        billet::BilletFacts,
        emitter::EmitterAccount,
    },
    util,
};

const SAFRA_POLICY: Mod11Policy = Mod11Policy {
    max_weight: 9,
    on_remainder_zero: 1,
    on_remainder_one: 0,
};

pub struct Safra;

impl Safra {
    fn sequential_digits(&self, facts: &BilletFacts) -> Result<(String, u8)> {
        let sequential = util::zpad_num(*facts.sequential(), 8)?;
        let digit = checksum::mod11(&sequential, &SAFRA_POLICY)?;
        Ok((sequential, digit))
    }
}

impl BankCodec for Safra {
    fn institution(&self) -> Institution {
        Institution::Safra
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
            "7{}{}{}{}2",
            util::zpad(emitter.agency(), 5)?,
            util::zpad(emitter.account(), 9)?,
            sequential,
            digit,
        ))
    }
}
