//! The emitter account is the payee-side banking data a billet is drawn
//! against: which institution, which agency/account (with their check
//! digits), which wallet, and whatever contract codes the institution
//! assigned. It is owned by the caller and read-only to the codecs.

use crate::{
    banks::Institution,
    error::{Error, Result},
};
use getset::Getters;

/// The emitter's account at a collecting institution.
///
/// Agency, account and their check digits are kept as digit strings rather
/// than numbers so leading zeroes survive; codecs zero-pad them out to each
/// institution's field widths. The agreement code ("convênio") and customer
/// code are optional here and validated by the codec that needs them, since
/// which lengths are legal depends on the institution and wallet.
#[derive(Clone, Debug, PartialEq, Getters, derive_builder::Builder)]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct EmitterAccount {
    /// The institution this account collects through
    institution: Institution,
    /// Agency number, digits only, without check digit
    agency: String,
    /// Agency check digit (may be empty when the institution has none)
    #[builder(default)]
    agency_digit: String,
    /// Account number, digits only, without check digit
    account: String,
    /// Account check digit (may be empty when the institution has none)
    #[builder(default)]
    account_digit: String,
    /// The institution-specific wallet ("carteira") code
    wallet: String,
    /// Bank-assigned agreement/contract code, where the institution uses one
    #[builder(default)]
    agreement_code: Option<String>,
    /// Customer code required by some wallet variants
    #[builder(default)]
    customer_code: Option<String>,
}

impl EmitterAccount {
    /// Start building an emitter account.
    pub fn builder() -> EmitterAccountBuilder {
        EmitterAccountBuilder::default()
    }
}

impl EmitterAccountBuilder {
    /// Build, mapping missing-field failures into the engine's error type.
    pub fn finish(self) -> Result<EmitterAccount> {
        self.build().map_err(Error::BuilderFailed)
    }
}
