//! Shared fixtures for the codec and builder tests: one canonical emitter
//! and one canonical set of billet facts, tweaked per-institution where a
//! bank's field widths demand it.

use crate::{
    banks::Institution,
    models::{
        billet::{BilletFacts, BilletFactsBuilder},
        emitter::{EmitterAccount, EmitterAccountBuilder},
    },
};
use chrono::NaiveDate;
use rust_decimal_macros::*;

/// A builder pre-filled with the standard test emitter. Tests chain extra
/// setters for agreement/customer codes or bank-specific field widths.
pub(crate) fn emitter(institution: Institution, wallet: &str) -> EmitterAccountBuilder {
    EmitterAccount::builder()
        .institution(institution)
        .agency("1234")
        .agency_digit("5")
        .account("567890")
        .account_digit("1")
        .wallet(wallet)
}

/// A builder pre-filled with the standard test billet facts: sequential 42,
/// document 1001, due 2026-03-10, R$ 1234.56.
pub(crate) fn facts() -> BilletFactsBuilder {
    BilletFacts::builder()
        .sequential(42u64)
        .document_number("1001")
        .due_date(NaiveDate::from_ymd_opt(2026, 3, 10).expect("fixture date"))
        .amount(dec!(1234.56))
}

/// A fully valid emitter for any institution, with whatever auxiliary codes
/// and field widths that institution's layout demands.
pub(crate) fn emitter_for(institution: Institution) -> EmitterAccount {
    let builder = match institution {
        Institution::BancoDoBrasil => emitter(institution, "18").agreement_code("1234567".to_string()),
        Institution::Santander => emitter(institution, "102").agreement_code("7890123".to_string()),
        Institution::Banrisul => emitter(institution, "1").agreement_code("7890123".to_string()),
        Institution::Brb => emitter(institution, "1").agency("058").account("1234567"),
        Institution::Caixa => emitter(institution, "RG").agreement_code("123456".to_string()),
        Institution::Unicred => emitter(institution, "21"),
        Institution::Bradesco => emitter(institution, "06"),
        Institution::Itau => emitter(institution, "109").account("56789"),
        Institution::Real => emitter(institution, "57").account("5678901"),
        Institution::Hsbc => emitter(institution, "CNR").agreement_code("7890123".to_string()),
        Institution::Safra => emitter(institution, "1"),
        Institution::Sicoob => emitter(institution, "1").agreement_code("7890123".to_string()),
    };
    builder.finish().expect("fixture emitter")
}
