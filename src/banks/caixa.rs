//! Caixa's collection rules (SIGCB). The wallet selection is a
//! registration flag: the registered wallet leads the 17-digit our-number
//! with 1, the unregistered one with 2, followed by the fixed
//! issued-by-beneficiary digit 4. The free field interleaves the
//! beneficiary code, its check digit, and the our-number split into three
//! runs with the two leading digits folded between them.

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

/// Billets issued by the beneficiary, the only emission mode this engine
/// produces.
const EMISSION: char = '4';

pub struct Caixa;

impl Caixa {
    /// The wallet's registration flag, the leading our-number digit.
    fn modality(&self, emitter: &EmitterAccount) -> Result<char> {
        banks::check_wallet(Institution::Caixa, emitter)?;
        match emitter.wallet().as_str() {
            "RG" => Ok('1'),
            _ => Ok('2'),
        }
    }

    /// The 6-digit beneficiary code off the agreement code.
    fn beneficiary_code(&self, emitter: &EmitterAccount) -> Result<String> {
        let agreement = banks::require_agreement_code(Institution::Caixa, emitter)?;
        if agreement.len() > 6 {
            Err(Error::InvalidAgreementCodeLength(agreement.len()))?;
        }
        util::zpad(agreement, 6)
    }

    /// The 17 digits of the our-number: modality + emission + sequential.
    fn our_number_digits(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        Ok(format!(
            "{}{}{}",
            self.modality(emitter)?,
            EMISSION,
            util::zpad_num(*facts.sequential(), 15)?,
        ))
    }
}

impl BankCodec for Caixa {
    fn institution(&self) -> Institution {
        Institution::Caixa
    }

    fn build_our_number(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        let digits = self.our_number_digits(emitter, facts)?;
        let digit = checksum::mod11(&digits, &Mod11Policy::STANDARD)?;
        Ok(format!("{}-{}", digits, digit))
    }

    fn build_free_field(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        let beneficiary = self.beneficiary_code(emitter)?;
        let beneficiary_digit = checksum::mod11(&beneficiary, &Mod11Policy::STANDARD)?;
        let our_number = self.our_number_digits(emitter, facts)?;
        // the our-number's three sequential runs, interleaved with its two
        // leading digits
        let partial = format!(
            "{}{}{}{}{}{}{}",
            beneficiary,
            beneficiary_digit,
            &our_number[2..5],
            &our_number[0..1],
            &our_number[5..8],
            &our_number[1..2],
            &our_number[8..17],
        );
        let field_digit = checksum::mod11(&partial, &Mod11Policy::STANDARD)?;
        Ok(format!("{}{}", partial, field_digit))
    }

    fn render_hints(&self, emitter: &EmitterAccount, _facts: &BilletFacts) -> Result<Vec<(String, String)>> {
        let beneficiary = self.beneficiary_code(emitter)?;
        let digit = checksum::mod11(&beneficiary, &Mod11Policy::STANDARD)?;
        Ok(vec![("beneficiary_digit".into(), digit.to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;

    fn caixa_emitter(wallet: &str) -> EmitterAccount {
        emitter(Institution::Caixa, wallet)
            .agreement_code("123456".to_string())
            .finish()
            .unwrap()
    }

    #[test]
    fn registered_wallet_leads_with_one() {
        let facts = facts().finish().unwrap();
        assert_eq!(
            Caixa.build_our_number(&caixa_emitter("RG"), &facts).unwrap(),
            "14000000000000042-1"
        );
        let field = Caixa.build_free_field(&caixa_emitter("RG"), &facts).unwrap();
        assert_eq!(field, "1234560000100040000000420");
        assert_eq!(field.len(), 25);
    }

    #[test]
    fn unregistered_wallet_leads_with_two() {
        let facts = facts().finish().unwrap();
        assert_eq!(
            Caixa.build_our_number(&caixa_emitter("SR"), &facts).unwrap(),
            "24000000000000042-0"
        );
        assert_eq!(
            Caixa.build_free_field(&caixa_emitter("SR"), &facts).unwrap(),
            "1234560000200040000000424"
        );
    }

    #[test]
    fn hints_expose_the_beneficiary_digit() {
        let facts = facts().finish().unwrap();
        let hints = Caixa.render_hints(&caixa_emitter("RG"), &facts).unwrap();
        assert_eq!(hints, vec![("beneficiary_digit".to_string(), "0".to_string())]);
    }

    #[test]
    fn rejects_missing_agreement_overlong_agreement_and_foreign_wallet() {
        let facts = facts().finish().unwrap();
        let missing = emitter(Institution::Caixa, "RG").finish().unwrap();
        assert_eq!(
            Caixa.build_free_field(&missing, &facts),
            Err(Error::MissingAgreementCode(104))
        );
        let overlong = emitter(Institution::Caixa, "RG")
            .agreement_code("1234567".to_string())
            .finish()
            .unwrap();
        assert_eq!(
            Caixa.build_free_field(&overlong, &facts),
            Err(Error::InvalidAgreementCodeLength(7))
        );
        let bad = caixa_emitter("CR");
        assert_eq!(
            Caixa.build_our_number(&bad, &facts),
            Err(Error::InvalidWallet { bank: 104, wallet: "CR".into() })
        );
    }
}
