//! Banco Real's collection rules. A single "collection digit", a mod-10
//! over our-number, agency and account together, ties the whole free field
//! to the emitter account.

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

pub struct Real;

impl Real {
    fn collection_parts(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<(String, String, String, u8)> {
        let sequential = util::zpad_num(*facts.sequential(), 13)?;
        let agency = util::zpad(emitter.agency(), 4)?;
        let account = util::zpad(emitter.account(), 7)?;
        let digit = checksum::mod10(&format!("{}{}{}", sequential, agency, account))?;
        Ok((sequential, agency, account, digit))
    }
}

impl BankCodec for Real {
    fn institution(&self) -> Institution {
        Institution::Real
    }

    fn build_our_number(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        let (sequential, _, _, digit) = self.collection_parts(emitter, facts)?;
        Ok(format!("{}-{}", sequential, digit))
    }

    fn build_free_field(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        let (sequential, agency, account, digit) = self.collection_parts(emitter, facts)?;
        Ok(format!("{}{}{}{}", agency, account, digit, sequential))
    }

    fn render_hints(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<Vec<(String, String)>> {
        let (_, _, _, digit) = self.collection_parts(emitter, facts)?;
        Ok(vec![("collection_digit".into(), digit.to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Error,
        util::test::*,
    };

    fn real_emitter() -> EmitterAccount {
        emitter(Institution::Real, "57").account("5678901").finish().unwrap()
    }

    #[test]
    fn our_number_and_free_field_share_the_collection_digit() {
        let facts = facts().finish().unwrap();
        assert_eq!(Real.build_our_number(&real_emitter(), &facts).unwrap(), "0000000000042-5");
        let field = Real.build_free_field(&real_emitter(), &facts).unwrap();
        assert_eq!(field, "1234567890150000000000042");
        assert_eq!(field.len(), 25);
        let hints = Real.render_hints(&real_emitter(), &facts).unwrap();
        assert_eq!(hints, vec![("collection_digit".to_string(), "5".to_string())]);
    }

    #[test]
    fn rejects_foreign_wallet() {
        let facts = facts().finish().unwrap();
        let bad = emitter(Institution::Real, "58").account("5678901").finish().unwrap();
        assert_eq!(
            Real.build_free_field(&bad, &facts),
            Err(Error::InvalidWallet { bank: 356, wallet: "58".into() })
        );
    }
}
