//! Billet facts are the per-billet half of a computation: the sequential
//! number handed out by the caller's sequence source, the merchant's own
//! document number, the due date and face amount, and the descriptive text
//! that flows straight through to the rendering layer.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use getset::Getters;
use rust_decimal::Decimal;

/// The facts of one billet. Immutable once built; one instance per billet.
#[derive(Clone, Debug, PartialEq, Getters, derive_builder::Builder)]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct BilletFacts {
    /// Monotonic per-emitter sequential number, assigned by the caller
    sequential: u64,
    /// The merchant's own document number ("seu número")
    document_number: String,
    /// Due date, encoded into the barcode as a day factor
    due_date: NaiveDate,
    /// Face amount in BRL
    amount: Decimal,
    /// Payer description, pass-through for rendering
    #[builder(default)]
    payer: String,
    /// Payee description, pass-through for rendering
    #[builder(default)]
    payee: String,
    /// Free-text instruction lines, pass-through for rendering
    #[builder(default)]
    instructions: Vec<String>,
}

impl BilletFacts {
    /// Start building the facts of a billet.
    pub fn builder() -> BilletFactsBuilder {
        BilletFactsBuilder::default()
    }
}

impl BilletFactsBuilder {
    /// Build, mapping missing-field failures into the engine's error type.
    pub fn finish(self) -> Result<BilletFacts> {
        self.build().map_err(Error::BuilderFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::*;

    #[test]
    fn builder_defaults_descriptive_fields() {
        let facts = BilletFacts::builder()
            .sequential(42u64)
            .document_number("1001")
            .due_date(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap())
            .amount(dec!(1234.56))
            .finish()
            .unwrap();
        assert_eq!(facts.sequential(), &42);
        assert_eq!(facts.payer(), "");
        assert_eq!(facts.instructions().len(), 0);

        let res = BilletFacts::builder().sequential(1u64).finish();
        assert!(matches!(res, Err(Error::BuilderFailed(_))));
    }
}
