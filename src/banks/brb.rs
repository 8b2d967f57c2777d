//! BRB's collection rules. The whole billet hangs off one 25-digit key:
//! zeros, agency, account, wallet, sequential, the bank code again, and the
//! double check digit pair over everything before it. Our-number and free
//! field are both views of that key, so the codec composes it once per
//! billet and memoizes it.
//!
//! The memo makes a [Brb] value single-billet by construction: the registry
//! hands out a fresh codec per derivation and this one must never be reused
//! across billets.

use crate::{
    banks::{self, BankCodec, Institution},
    checksum,
    error::Result,
    models::{
        billet::BilletFacts,
        emitter::EmitterAccount,
    },
    util,
};
use std::cell::OnceCell;

#[derive(Default)]
pub struct Brb {
    key: OnceCell<String>,
}

impl Brb {
    /// The 25-digit key, composed on first call and cached for the rest of
    /// this billet's derivation.
    fn key(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        if let Some(key) = self.key.get() {
            return Ok(key.clone());
        }
        banks::check_wallet(Institution::Brb, emitter)?;
        let payload = format!(
            "000{}{}{}{}070",
            util::zpad(emitter.agency(), 3)?,
            util::zpad(emitter.account(), 7)?,
            emitter.wallet(),
            util::zpad_num(*facts.sequential(), 6)?,
        );
        let (first, second) = checksum::double_check_digits(&payload)?;
        let key = format!("{}{}{}", payload, first, second);
        Ok(self.key.get_or_init(|| key).clone())
    }
}

impl BankCodec for Brb {
    fn institution(&self) -> Institution {
        Institution::Brb
    }

    /// Sequential and the key's check digit pair. The pair is computed over
    /// the full key, so it also covers agency and account.
    fn build_our_number(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        let key = self.key(emitter, facts)?;
        Ok(format!("{}-{}", &key[14..20], &key[23..25]))
    }

    fn build_free_field(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        self.key(emitter, facts)
    }
}
