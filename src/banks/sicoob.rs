//! Sicoob's collection rules. The our-number digit runs on the
//! cooperative's constant 3-1-9-7 weight cycle over agency + assignor code
//! + sequential, applied left to right, which fits neither of the shared
//! cyclic algorithms and uses the raw weighted remainder instead.

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

/// Fixed "simple collection" modality digits inside the free field.
const MODALITY: &str = "01";
/// Single-installment billets only; the field is constant.
const INSTALLMENT: &str = "001";

pub struct Sicoob;

impl Sicoob {
    /// The 7-digit assignor code off the agreement code.
    fn assignor_code(&self, emitter: &EmitterAccount) -> Result<String> {
        let agreement = banks::require_agreement_code(Institution::Sicoob, emitter)?;
        if agreement.len() > 7 {
            Err(Error::InvalidAgreementCodeLength(agreement.len()))?;
        }
        util::zpad(agreement, 7)
    }

    /// Sequential number and its 3-1-9-7 cycle digit. The digit is weighted
    /// over agency(4) + assignor(10) + sequential(7); remainders 0 and 1
    /// both collapse to 0.
    fn sequential_digits(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<(String, u8)> {
        let sequential = util::zpad_num(*facts.sequential(), 7)?;
        let base = format!(
            "{}{}{}",
            util::zpad(emitter.agency(), 4)?,
            util::zpad(&self.assignor_code(emitter)?, 10)?,
            sequential,
        );
        let digit = match checksum::cycle_remainder(&base, &[3, 1, 9, 7])? {
            0 | 1 => 0,
            rem => (11 - rem) as u8,
        };
        Ok((sequential, digit))
    }
}

impl BankCodec for Sicoob {
    fn institution(&self) -> Institution {
        Institution::Sicoob
    }

    fn build_our_number(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        let (sequential, digit) = self.sequential_digits(emitter, facts)?;
        Ok(format!("{}-{}", sequential, digit))
    }

    fn build_free_field(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String> {
        banks::check_wallet(self.institution(), emitter)?;
        let (sequential, digit) = self.sequential_digits(emitter, facts)?;
        Ok(format!(
            "{}{}{}{}{}{}{}",
            emitter.wallet(),
            util::zpad(emitter.agency(), 4)?,
            MODALITY,
            self.assignor_code(emitter)?,
            sequential,
            digit,
            INSTALLMENT,
        ))
    }

    fn render_hints(&self, _emitter: &EmitterAccount, _facts: &BilletFacts) -> Result<Vec<(String, String)>> {
        Ok(vec![
            ("modality".into(), MODALITY.into()),
            ("installment".into(), INSTALLMENT.into()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;

    fn sicoob_emitter(wallet: &str) -> EmitterAccount {
        emitter(Institution::Sicoob, wallet)
            .agreement_code("7890123".to_string())
            .finish()
            .unwrap()
    }

    #[test]
    fn our_number_uses_the_cooperative_weight_cycle() {
        let facts = facts().finish().unwrap();
        assert_eq!(Sicoob.build_our_number(&sicoob_emitter("1"), &facts).unwrap(), "0000042-6");
    }

    #[test]
    fn free_field_layout() {
        let facts = facts().finish().unwrap();
        let field = Sicoob.build_free_field(&sicoob_emitter("1"), &facts).unwrap();
        assert_eq!(field, "1123401789012300000426001");
        assert_eq!(field.len(), 25);
    }

    #[test]
    fn rejects_missing_agreement_and_foreign_wallet() {
        let facts = facts().finish().unwrap();
        let missing = emitter(Institution::Sicoob, "1").finish().unwrap();
        assert_eq!(
            Sicoob.build_free_field(&missing, &facts),
            Err(Error::MissingAgreementCode(756))
        );
        assert_eq!(
            Sicoob.build_our_number(&sicoob_emitter("2"), &facts),
            Err(Error::InvalidWallet { bank: 756, wallet: "2".into() })
        );
    }
}
