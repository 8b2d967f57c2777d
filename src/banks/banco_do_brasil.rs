//! Banco do Brasil's collection rules. Everything here branches on the
//! length of the bank-assigned agreement code ("convênio"): 4- and 6-digit
//! codes share an 11-digit our-number with a mod-11 display digit, while
//! 7-digit codes switch to a 17-digit our-number with no display digit and
//! a zero-prefixed free field. Any other length is the caller's mistake.

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

pub struct BancoDoBrasil;

impl BancoDoBrasil {
    /// The agreement-length branch: (agreement, sequential) digit pair for
    /// the 4/6/7 layouts.
    fn layout(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<(String, String)> {
        let agreement = banks::require_agreement_code(Institution::BancoDoBrasil, emitter)?;
        let sequential = match agreement.len() {
            4 => util::zpad_num(*facts.sequential(), 7)?,
            6 => util::zpad_num(*facts.sequential(), 5)?,
            7 => util::zpad_num(*facts.sequential(), 10)?,
            len => Err(Error::InvalidAgreementCodeLength(len))?,
        };
        util::digit_values(agreement)?;
        Ok((agreement.into(), sequential))
    }

    /// The bank's mod-11 display digit, which is not always a digit:
    /// remainder 1 prints as `X`.
    fn display_digit(&self, base: &str) -> Result<char> {
        let digit = match checksum::mod11_remainder(base, 9)? {
            0 => '0',
            1 => 'X',
            rem => (b'0' + (11 - rem) as u8) as char,
        };
        Ok(digit)
    }
}

impl BankCodec for BancoDoBrasil {
    fn institution(&self) -> Institution {
        Institution::BancoDoBrasil
    }

    fn build_our_number(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        let (agreement, sequential) = self.layout(emitter, facts)?;
        let base = format!("{}{}", agreement, sequential);
        // the 17-digit layout carries no display digit
        if agreement.len() == 7 {
            return Ok(base);
        }
        Ok(format!("{}-{}", base, self.display_digit(&base)?))
    }

    fn build_free_field(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        let (agreement, sequential) = self.layout(emitter, facts)?;
        let wallet = util::zpad(emitter.wallet(), 2)?;
        let field = match agreement.len() {
            7 => format!("000000{}{}{}", agreement, sequential, wallet),
            _ => format!(
                "{}{}{}{}{}",
                agreement,
                sequential,
                util::zpad(emitter.agency(), 4)?,
                util::zpad(emitter.account(), 8)?,
                wallet,
            ),
        };
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;

    fn bb_emitter(agreement: &str) -> EmitterAccount {
        emitter(Institution::BancoDoBrasil, "18")
            .agreement_code(agreement.to_string())
            .finish()
            .unwrap()
    }

    #[test]
    fn four_digit_agreement_layout() {
        let emitter = bb_emitter("1234");
        let facts = facts().finish().unwrap();
        assert_eq!(BancoDoBrasil.build_our_number(&emitter, &facts).unwrap(), "12340000042-9");
        let field = BancoDoBrasil.build_free_field(&emitter, &facts).unwrap();
        assert_eq!(field, "1234000004212340056789018");
        assert_eq!(field.len(), 25);
    }

    #[test]
    fn six_digit_agreement_layout() {
        let emitter = bb_emitter("123456");
        let facts = facts().finish().unwrap();
        assert_eq!(BancoDoBrasil.build_our_number(&emitter, &facts).unwrap(), "12345600042-4");
        let field = BancoDoBrasil.build_free_field(&emitter, &facts).unwrap();
        assert_eq!(field, "1234560004212340056789018");
        assert_eq!(field.len(), 25);
    }

    #[test]
    fn seven_digit_agreement_layout_has_no_display_digit() {
        let emitter = bb_emitter("1234567");
        let facts = facts().finish().unwrap();
        assert_eq!(BancoDoBrasil.build_our_number(&emitter, &facts).unwrap(), "12345670000000042");
        let field = BancoDoBrasil.build_free_field(&emitter, &facts).unwrap();
        assert_eq!(field, "0000001234567000000004218");
        assert_eq!(field.len(), 25);
    }

    #[test]
    fn rejects_unsupported_agreement_lengths() {
        let facts = facts().finish().unwrap();
        for agreement in &["123", "12345", "12345678"] {
            let emitter = bb_emitter(agreement);
            assert_eq!(
                BancoDoBrasil.build_our_number(&emitter, &facts),
                Err(Error::InvalidAgreementCodeLength(agreement.len()))
            );
            assert_eq!(
                BancoDoBrasil.build_free_field(&emitter, &facts),
                Err(Error::InvalidAgreementCodeLength(agreement.len()))
            );
        }
    }

    #[test]
    fn rejects_missing_agreement_and_foreign_wallet() {
        let facts = facts().finish().unwrap();
        let no_agreement = emitter(Institution::BancoDoBrasil, "18").finish().unwrap();
        assert_eq!(
            BancoDoBrasil.build_our_number(&no_agreement, &facts),
            Err(Error::MissingAgreementCode(1))
        );
        let bad_wallet = emitter(Institution::BancoDoBrasil, "99")
            .agreement_code("1234".to_string())
            .finish()
            .unwrap();
        assert_eq!(
            BancoDoBrasil.build_our_number(&bad_wallet, &facts),
            Err(Error::InvalidWallet { bank: 1, wallet: "99".into() })
        );
    }

    #[test]
    fn remainder_one_prints_as_x() {
        assert_eq!(BancoDoBrasil.display_digit("107000321").unwrap(), 'X');
        assert_eq!(BancoDoBrasil.display_digit("0014").unwrap(), '0');
        assert_eq!(BancoDoBrasil.display_digit("9194").unwrap(), '4');
    }
}
