//! The banks module holds the per-institution collection rules: a common
//! codec contract, one implementation per institution, and the registry
//! that maps a clearing-house bank code to its codec.
//!
//! The set of institutions is closed on purpose. Each one is a variant of
//! [Institution], so "which banks exist" is a compile-time question and the
//! registry dispatch is an exhaustive match, not a lookup that can silently
//! miss.

pub mod banco_do_brasil;
pub mod banrisul;
pub mod bradesco;
pub mod brb;
pub mod caixa;
pub mod hsbc;
pub mod itau;
pub mod real;
pub mod safra;
pub mod santander;
pub mod sicoob;
pub mod unicred;

use crate::{
    error::{Error, Result},
    models::{
        billet::BilletFacts,
        computed::ParsedFreeField,
        emitter::EmitterAccount,
    },
};

/// A wallet an institution accepts, with its display name.
#[derive(Clone, Debug, PartialEq)]
pub struct Wallet {
    code: &'static str,
    name: &'static str,
}

impl Wallet {
    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// The set of wallet codes an institution accepts. A codec must reject any
/// wallet outside its spec, never default it.
#[derive(Clone, Debug, PartialEq)]
pub struct WalletSpec {
    wallets: Vec<Wallet>,
}

impl WalletSpec {
    fn new(wallets: &[(&'static str, &'static str)]) -> Self {
        Self {
            wallets: wallets.iter()
                .map(|(code, name)| Wallet { code, name })
                .collect(),
        }
    }

    /// Whether this wallet code is accepted.
    pub fn accepts(&self, code: &str) -> bool {
        self.wallets.iter().any(|w| w.code == code)
    }

    /// Display name for a wallet code, if accepted.
    pub fn name_of(&self, code: &str) -> Option<&'static str> {
        self.wallets.iter()
            .find(|w| w.code == code)
            .map(|w| w.name)
    }

    /// All accepted wallets.
    pub fn wallets(&self) -> &Vec<Wallet> {
        &self.wallets
    }
}

/// The contract every institution codec satisfies.
///
/// Codec values are cheap and should be obtained fresh from
/// [Institution::codec] for each billet derivation: one codec (BRB)
/// memoizes its composed key and must never see two different billets.
pub trait BankCodec {
    /// Which institution this codec encodes for.
    fn institution(&self) -> Institution;

    /// Agency in the institution's display form.
    fn format_agency(&self, emitter: &EmitterAccount) -> String {
        if emitter.agency_digit().is_empty() {
            emitter.agency().clone()
        } else {
            format!("{}-{}", emitter.agency(), emitter.agency_digit())
        }
    }

    /// Account in the institution's display form.
    fn format_account(&self, emitter: &EmitterAccount) -> String {
        if emitter.account_digit().is_empty() {
            emitter.account().clone()
        } else {
            format!("{}-{}", emitter.account(), emitter.account_digit())
        }
    }

    /// The institution's identifier for this billet, display form. Fails
    /// when the wallet is not accepted or a required auxiliary field is
    /// missing or malformed.
    fn build_our_number(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String>;

    /// Positions 20-44 of the barcode: exactly 25 digits. Must agree with
    /// [BankCodec::build_our_number] on the underlying digits.
    fn build_free_field(&self, emitter: &EmitterAccount, facts: &BilletFacts) -> Result<String>;

    /// Best-effort inverse of [BankCodec::build_free_field]. Not every
    /// layout is invertible; the default is "cannot parse".
    fn parse_free_field(&self, _free_field: &str) -> Option<ParsedFreeField> {
        None
    }

    /// Complementary key/value rendering data (auxiliary digits, fixed
    /// indicators) the institution prints outside the computed fields.
    fn render_hints(&self, _emitter: &EmitterAccount, _facts: &BilletFacts) -> Result<Vec<(String, String)>> {
        Ok(vec![])
    }
}

/// The closed set of institutions the engine encodes for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Institution {
    BancoDoBrasil,
    Santander,
    Banrisul,
    Brb,
    Caixa,
    Unicred,
    Bradesco,
    Itau,
    Real,
    Hsbc,
    Safra,
    Sicoob,
}

impl Institution {
    /// Every institution, in bank-code order.
    pub fn all() -> &'static [Institution] {
        &[
            Institution::BancoDoBrasil,
            Institution::Santander,
            Institution::Banrisul,
            Institution::Brb,
            Institution::Caixa,
            Institution::Unicred,
            Institution::Bradesco,
            Institution::Itau,
            Institution::Real,
            Institution::Hsbc,
            Institution::Safra,
            Institution::Sicoob,
        ]
    }

    /// Registry lookup by clearing-house bank code.
    pub fn from_code(code: u16) -> Result<Self> {
        match code {
            1 => Ok(Institution::BancoDoBrasil),
            33 => Ok(Institution::Santander),
            41 => Ok(Institution::Banrisul),
            70 => Ok(Institution::Brb),
            104 => Ok(Institution::Caixa),
            136 => Ok(Institution::Unicred),
            237 => Ok(Institution::Bradesco),
            341 => Ok(Institution::Itau),
            356 => Ok(Institution::Real),
            399 => Ok(Institution::Hsbc),
            422 => Ok(Institution::Safra),
            756 => Ok(Institution::Sicoob),
            _ => Err(Error::UnknownBankCode(code)),
        }
    }

    /// The clearing-house bank code.
    pub fn code(&self) -> u16 {
        match self {
            Institution::BancoDoBrasil => 1,
            Institution::Santander => 33,
            Institution::Banrisul => 41,
            Institution::Brb => 70,
            Institution::Caixa => 104,
            Institution::Unicred => 136,
            Institution::Bradesco => 237,
            Institution::Itau => 341,
            Institution::Real => 356,
            Institution::Hsbc => 399,
            Institution::Safra => 422,
            Institution::Sicoob => 756,
        }
    }

    /// The bank code as the three barcode digits.
    pub fn code_digits(&self) -> String {
        format!("{:03}", self.code())
    }

    /// Human name of the institution.
    pub fn name(&self) -> &'static str {
        match self {
            Institution::BancoDoBrasil => "Banco do Brasil",
            Institution::Santander => "Santander",
            Institution::Banrisul => "Banrisul",
            Institution::Brb => "Banco de Brasília",
            Institution::Caixa => "Caixa Econômica Federal",
            Institution::Unicred => "Unicred",
            Institution::Bradesco => "Bradesco",
            Institution::Itau => "Itaú",
            Institution::Real => "Banco Real",
            Institution::Hsbc => "HSBC",
            Institution::Safra => "Banco Safra",
            Institution::Sicoob => "Sicoob",
        }
    }

    /// The wallets this institution accepts.
    pub fn wallets(&self) -> WalletSpec {
        match self {
            Institution::BancoDoBrasil => WalletSpec::new(&[
                ("11", "Cobrança Simples com registro"),
                ("16", "Cobrança Simples com registro"),
                ("17", "Cobrança Direta Especial"),
                ("18", "Cobrança Simples"),
            ]),
            Institution::Santander => WalletSpec::new(&[
                ("101", "Cobrança Rápida com registro"),
                ("102", "Cobrança sem registro"),
                ("201", "Penhor Rápida com registro"),
            ]),
            Institution::Banrisul => WalletSpec::new(&[
                ("1", "Cobrança com registro"),
                ("2", "Cobrança sem registro"),
            ]),
            Institution::Brb => WalletSpec::new(&[
                ("1", "Cobrança Direta"),
                ("2", "Cobrança Caucionada"),
            ]),
            Institution::Caixa => WalletSpec::new(&[
                ("RG", "Cobrança Registrada"),
                ("SR", "Cobrança Sem Registro"),
            ]),
            Institution::Unicred => WalletSpec::new(&[
                ("21", "Cobrança com registro"),
            ]),
            Institution::Bradesco => WalletSpec::new(&[
                ("02", "Cobrança sem registro"),
                ("03", "Cobrança com registro"),
                ("06", "Cobrança sem registro"),
                ("09", "Cobrança escritural"),
            ]),
            Institution::Itau => WalletSpec::new(&[
                ("109", "Cobrança Direta"),
                ("110", "Cobrança Direta"),
                ("175", "Cobrança sem registro"),
                ("107", "Cobrança Direta Especial"),
                ("122", "Cobrança Direta Especial"),
                ("142", "Cobrança Direta Especial"),
                ("143", "Cobrança Direta Especial"),
                ("196", "Cobrança Direta Especial"),
                ("198", "Cobrança Direta Especial"),
            ]),
            Institution::Real => WalletSpec::new(&[
                ("20", "Cobrança sem registro"),
                ("57", "Cobrança com registro"),
            ]),
            Institution::Hsbc => WalletSpec::new(&[
                ("CNR", "Cobrança Não Registrada"),
            ]),
            Institution::Safra => WalletSpec::new(&[
                ("1", "Cobrança com registro"),
                ("2", "Cobrança sem registro"),
            ]),
            Institution::Sicoob => WalletSpec::new(&[
                ("1", "Cobrança Simples"),
                ("3", "Cobrança Garantida"),
            ]),
        }
    }

    /// Default "payable at" text printed on the slip.
    pub fn payment_place(&self) -> &'static str {
        match self {
            Institution::Caixa => "Preferencialmente nas Casas Lotéricas até o valor limite",
            _ => "Pagável em qualquer banco até o vencimento",
        }
    }

    /// Logo asset reference, resolved by the rendering layer.
    pub fn logo_asset(&self) -> &'static str {
        match self {
            Institution::BancoDoBrasil => "logo_bb.png",
            Institution::Santander => "logo_santander.png",
            Institution::Banrisul => "logo_banrisul.png",
            Institution::Brb => "logo_brb.png",
            Institution::Caixa => "logo_caixa.png",
            Institution::Unicred => "logo_unicred.png",
            Institution::Bradesco => "logo_bradesco.png",
            Institution::Itau => "logo_itau.png",
            Institution::Real => "logo_real.png",
            Institution::Hsbc => "logo_hsbc.png",
            Institution::Safra => "logo_safra.png",
            Institution::Sicoob => "logo_sicoob.png",
        }
    }

    /// Whether this institution's layouts require a bank-assigned
    /// agreement/customer contract code on the emitter account.
    pub fn requires_agreement_code(&self) -> bool {
        match self {
            Institution::BancoDoBrasil
                | Institution::Santander
                | Institution::Banrisul
                | Institution::Caixa
                | Institution::Hsbc
                | Institution::Sicoob => true,
            _ => false,
        }
    }

    /// A fresh codec for this institution. Obtain one per billet
    /// derivation; see [BankCodec].
    pub fn codec(&self) -> Box<dyn BankCodec> {
        match self {
            Institution::BancoDoBrasil => Box::new(banco_do_brasil::BancoDoBrasil),
            Institution::Santander => Box::new(santander::Santander),
            Institution::Banrisul => Box::new(banrisul::Banrisul),
            Institution::Brb => Box::new(brb::Brb::default()),
            Institution::Caixa => Box::new(caixa::Caixa),
            Institution::Unicred => Box::new(unicred::Unicred),
            Institution::Bradesco => Box::new(bradesco::Bradesco),
            Institution::Itau => Box::new(itau::Itau),
            Institution::Real => Box::new(real::Real),
            Institution::Hsbc => Box::new(hsbc::Hsbc),
            Institution::Safra => Box::new(safra::Safra),
            Institution::Sicoob => Box::new(sicoob::Sicoob),
        }
    }
}

/// Reject a wallet outside the institution's spec. Every codec calls this
/// before composing a single digit.
pub(crate) fn check_wallet(institution: Institution, emitter: &EmitterAccount) -> Result<()> {
    if !institution.wallets().accepts(emitter.wallet()) {
        Err(Error::InvalidWallet {
            bank: institution.code(),
            wallet: emitter.wallet().clone(),
        })?;
    }
    Ok(())
}

/// Pull the agreement code off the emitter, failing if the institution
/// requires one and it is absent.
pub(crate) fn require_agreement_code<'a>(institution: Institution, emitter: &'a EmitterAccount) -> Result<&'a str> {
    emitter.agreement_code()
        .as_ref()
        .map(|code| code.as_str())
        .ok_or(Error::MissingAgreementCode(institution.code()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_round_trips_every_institution() {
        for institution in Institution::all() {
            assert_eq!(Institution::from_code(institution.code()).unwrap(), *institution);
            assert_eq!(institution.codec().institution(), *institution);
            assert_eq!(institution.code_digits().len(), 3);
        }
    }

    #[test]
    fn registry_rejects_unknown_codes() {
        assert_eq!(Institution::from_code(999), Err(Error::UnknownBankCode(999)));
        assert_eq!(Institution::from_code(0), Err(Error::UnknownBankCode(0)));
    }

    #[test]
    fn wallet_spec_lookups() {
        let wallets = Institution::Bradesco.wallets();
        assert!(wallets.accepts("06"));
        assert!(!wallets.accepts("6"));
        assert_eq!(wallets.name_of("09"), Some("Cobrança escritural"));
        assert_eq!(wallets.name_of("99"), None);
    }

    #[test]
    fn agreement_requirement_matches_the_codecs() {
        let facts = crate::util::test::facts().finish().unwrap();
        for institution in Institution::all() {
            if !institution.requires_agreement_code() {
                continue;
            }
            let base = crate::util::test::emitter_for(*institution);
            let stripped = EmitterAccount::builder()
                .institution(*institution)
                .agency(base.agency().clone())
                .account(base.account().clone())
                .wallet(base.wallet().clone())
                .finish()
                .unwrap();
            let codec = institution.codec();
            assert_eq!(
                codec.build_free_field(&stripped, &facts),
                Err(Error::MissingAgreementCode(institution.code())),
                "{:?}", institution
            );
        }
    }

    #[test]
    fn capability_table_is_total() {
        for institution in Institution::all() {
            assert!(!institution.name().is_empty());
            assert!(!institution.logo_asset().is_empty());
            assert!(!institution.payment_place().is_empty());
            assert!(!institution.wallets().wallets().is_empty());
        }
    }
}
