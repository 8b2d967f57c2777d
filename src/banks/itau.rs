//! Itaú's collection rules. Two families of wallets share one codec: the
//! generic layout chains two mod-10 DACs (one over agency + account +
//! wallet + sequential, one over agency + account alone), while the direct
//! special wallets swap agency and account out of the free field for the
//! merchant's document number and a mandatory 5-digit customer code.

use crate::{
    banks::{self, BankCodec, Institution},
    checksum,
    error::{Error, Result},
    models::{
        billet::BilletFacts,
        computed::ParsedFreeField,
        emitter::EmitterAccount,
    },
    util,
};

/// The wallets that gate on the 5-digit customer code.
const CUSTOMER_CODE_WALLETS: &[&str] = &["107", "122", "142", "143", "196", "198"];

pub struct Itau;

impl Itau {
    fn is_special(&self, emitter: &EmitterAccount) -> bool {
        CUSTOMER_CODE_WALLETS.contains(&emitter.wallet().as_str())
    }

    /// The customer code the special wallets require, zero-padded to 5.
    fn customer_code(&self, emitter: &EmitterAccount) -> Result<String> {
        let code = emitter.customer_code()
            .as_ref()
            .ok_or_else(|| Error::MissingCustomerCode(emitter.wallet().clone()))?;
        util::zpad(code, 5)
    }

    /// The merchant document number, digits only, zero-padded to 7.
    fn document_digits(&self, facts: &BilletFacts) -> Result<String> {
        let digits: String = facts.document_number()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        util::zpad(&digits, 7)
    }

    /// DAC over agency + account + wallet + sequential, the digit printed
    /// with the generic our-number.
    fn generic_dac(&self, emitter: &EmitterAccount, sequential: &str) -> Result<u8> {
        checksum::mod10(&format!(
            "{}{}{}{}",
            util::zpad(emitter.agency(), 4)?,
            util::zpad(emitter.account(), 5)?,
            emitter.wallet(),
            sequential,
        ))
    }

    /// DAC over the special-wallet payload: wallet + sequential + document
    /// + customer code.
    fn special_dac(&self, emitter: &EmitterAccount, facts: &BilletFacts, sequential: &str) -> Result<u8> {
        checksum::mod10(&format!(
            "{}{}{}{}",
            emitter.wallet(),
            sequential,
            self.document_digits(facts)?,
            self.customer_code(emitter)?,
        ))
    }
}

impl BankCodec for Itau {
    fn institution(&self) -> Institution {
        Institution::Itau
    }

    fn build_our_number(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        let sequential = util::zpad_num(*facts.sequential(), 8)?;
        let dac = if self.is_special(emitter) {
            self.special_dac(emitter, facts, &sequential)?
        } else {
            self.generic_dac(emitter, &sequential)?
        };
        Ok(format!("{}/{}-{}", emitter.wallet(), sequential, dac))
    }

    fn build_free_field(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        let sequential = util::zpad_num(*facts.sequential(), 8)?;
        if self.is_special(emitter) {
            let field = format!(
                "{}{}{}{}{}0",
                emitter.wallet(),
                sequential,
                self.document_digits(facts)?,
                self.customer_code(emitter)?,
                self.special_dac(emitter, facts, &sequential)?,
            );
            return Ok(field);
        }
        let agency = util::zpad(emitter.agency(), 4)?;
        let account = util::zpad(emitter.account(), 5)?;
        let account_dac = checksum::mod10(&format!("{}{}", agency, account))?;
        Ok(format!(
            "{}{}{}{}{}{}000",
            emitter.wallet(),
            sequential,
            self.generic_dac(emitter, &sequential)?,
            agency,
            account,
            account_dac,
        ))
    }

    /// Inverse of the generic layout only; the special layouts carry no
    /// agency/account to recover.
    fn parse_free_field(&self, free_field: &str) -> Option<ParsedFreeField> {
        if free_field.len() != 25 || !free_field.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        if CUSTOMER_CODE_WALLETS.contains(&&free_field[0..3]) {
            return None;
        }
        Some(ParsedFreeField {
            wallet: Some(free_field[0..3].into()),
            sequential: Some(free_field[3..11].into()),
            agency: Some(free_field[12..16].into()),
            account: Some(free_field[16..21].into()),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;

    fn generic_emitter() -> EmitterAccount {
        emitter(Institution::Itau, "109").account("56789").finish().unwrap()
    }

    fn special_emitter(customer_code: Option<&str>) -> EmitterAccount {
        let builder = emitter(Institution::Itau, "107").account("56789");
        let builder = match customer_code {
            Some(code) => builder.customer_code(code.to_string()),
            None => builder,
        };
        builder.finish().unwrap()
    }

    #[test]
    fn generic_wallet_layout() {
        let facts = facts().finish().unwrap();
        assert_eq!(Itau.build_our_number(&generic_emitter(), &facts).unwrap(), "109/00000042-4");
        let field = Itau.build_free_field(&generic_emitter(), &facts).unwrap();
        assert_eq!(field, "1090000004241234567897000");
        assert_eq!(field.len(), 25);
    }

    #[test]
    fn special_wallet_embeds_customer_code() {
        let facts = facts().finish().unwrap();
        let emitter = special_emitter(Some("12345"));
        assert_eq!(Itau.build_our_number(&emitter, &facts).unwrap(), "107/00000042-7");
        let field = Itau.build_free_field(&emitter, &facts).unwrap();
        assert_eq!(field, "1070000004200010011234570");
        assert_eq!(field.len(), 25);
        // the zero-padded customer code appears verbatim
        assert_eq!(&field[18..23], "12345");
    }

    #[test]
    fn special_wallet_without_customer_code_fails() {
        let facts = facts().finish().unwrap();
        let emitter = special_emitter(None);
        assert_eq!(
            Itau.build_free_field(&emitter, &facts),
            Err(Error::MissingCustomerCode("107".into()))
        );
        assert_eq!(
            Itau.build_our_number(&emitter, &facts),
            Err(Error::MissingCustomerCode("107".into()))
        );
    }

    #[test]
    fn generic_wallet_ignores_customer_code_gate() {
        let facts = facts().finish().unwrap();
        // no customer code, non-gated wallet: generic layout applies
        assert!(Itau.build_free_field(&generic_emitter(), &facts).is_ok());
    }

    #[test]
    fn rejects_foreign_wallet() {
        let facts = facts().finish().unwrap();
        let bad = emitter(Institution::Itau, "111").account("56789").finish().unwrap();
        assert_eq!(
            Itau.build_our_number(&bad, &facts),
            Err(Error::InvalidWallet { bank: 341, wallet: "111".into() })
        );
    }

    #[test]
    fn parses_generic_layout_only() {
        let parsed = Itau.parse_free_field("1090000004241234567897000").unwrap();
        assert_eq!(parsed.wallet.as_deref(), Some("109"));
        assert_eq!(parsed.sequential.as_deref(), Some("00000042"));
        assert_eq!(parsed.agency.as_deref(), Some("1234"));
        assert_eq!(parsed.account.as_deref(), Some("56789"));
        assert_eq!(Itau.parse_free_field("1070000004200010011234570"), None);
    }
}
