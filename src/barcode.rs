//! This module holds the shared half of a billet: the FEBRABAN barcode and
//! digitable line that every institution's free field slots into. Nothing
//! here is bank-specific: the codec hands over 25 digits and this module
//! wraps them with the bank code, currency, due-date factor, amount, and
//! the fixed check digits.

use crate::{
    banks::Institution,
    checksum,
    error::{Error, Result},
    models::{
        billet::BilletFacts,
        computed::ComputedFields,
        emitter::EmitterAccount,
    },
    util,
};
use chrono::NaiveDate;
use rust_decimal::prelude::*;

/// The fixed currency code: 9, Brazilian Real. The standard defines no
/// other value in circulation.
pub const CURRENCY_CODE: char = '9';

/// The epoch the due-date factor counts from.
fn factor_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1997, 10, 7).expect("fixed epoch date")
}

/// Days since the factor epoch, four digits. Once the plain day count
/// passes 9999 (2025-02-21) the factor wraps back to 1000, per the
/// standard's rollover rule. Dates before the epoch cannot be encoded.
pub fn due_date_factor(due_date: &NaiveDate) -> Result<String> {
    let days = due_date.signed_duration_since(factor_epoch()).num_days();
    if days < 0 {
        Err(Error::DueDateOutOfRange(*due_date))?;
    }
    let factor = if days <= 9999 {
        days
    } else {
        1000 + (days - 1000) % 9000
    };
    util::zpad_num(factor as u64, 4)
}

/// The face amount as ten fixed-point digits (cents). Negative amounts,
/// sub-cent precision, and amounts past the field's width are rejected
/// rather than rounded or truncated.
pub fn amount_digits(amount: &Decimal) -> Result<String> {
    if amount.is_sign_negative() {
        Err(Error::AmountNotEncodable(*amount))?;
    }
    let cents = amount * Decimal::from(100);
    if !cents.fract().is_zero() {
        Err(Error::AmountNotEncodable(*amount))?;
    }
    let cents = cents.to_u64().ok_or(Error::AmountNotEncodable(*amount))?;
    if cents >= 10_000_000_000 {
        Err(Error::AmountNotEncodable(*amount))?;
    }
    util::zpad_num(cents, 10)
}

/// Assemble the 44-digit barcode: bank(3) + currency(1) + check digit(1) +
/// due-date factor(4) + amount(10) + free field(25). The check digit is the
/// fixed mod-11 over the other 43 positions.
pub fn assemble(institution: Institution, due_date: &NaiveDate, amount: &Decimal, free_field: &str) -> Result<String> {
    if free_field.len() != 25 {
        Err(Error::FieldOverflow { value: free_field.into(), width: 25 })?;
    }
    util::digit_values(free_field)?;
    let factor = due_date_factor(due_date)?;
    let amount = amount_digits(amount)?;
    let partial = format!(
        "{}{}{}{}{}",
        institution.code_digits(),
        CURRENCY_CODE,
        factor,
        amount,
        free_field,
    );
    let check = checksum::barcode_check_digit(&partial)?;
    Ok(format!(
        "{}{}{}{}{}{}",
        institution.code_digits(),
        CURRENCY_CODE,
        check,
        factor,
        amount,
        free_field,
    ))
}

/// Re-group a 44-digit barcode into the five typable blocks of the
/// digitable line. The first three blocks cover the bank/currency digits
/// and the free field, each closed by its own mod-10 digit; the fourth is
/// the barcode check digit; the fifth is the factor and amount.
pub fn digitable_line(barcode: &str) -> Result<String> {
    if barcode.len() != 44 {
        Err(Error::FieldOverflow { value: barcode.into(), width: 44 })?;
    }
    util::digit_values(barcode)?;
    let free_field = &barcode[19..44];
    let block1 = format!("{}{}", &barcode[0..4], &free_field[0..5]);
    let block1 = format!("{}{}", block1, checksum::mod10(&block1)?);
    let block2 = format!("{}{}", &free_field[5..15], checksum::mod10(&free_field[5..15])?);
    let block3 = format!("{}{}", &free_field[15..25], checksum::mod10(&free_field[15..25])?);
    Ok(format!(
        "{}.{} {}.{} {}.{} {} {}",
        &block1[0..5], &block1[5..10],
        &block2[0..5], &block2[5..11],
        &block3[0..5], &block3[5..11],
        &barcode[4..5],
        &barcode[5..19],
    ))
}

/// Derive every computed field for one billet. A fresh codec is taken from
/// the registry per call, which scopes any codec-internal memo to this one
/// derivation.
pub fn compute(emitter: &EmitterAccount, facts: &BilletFacts) -> Result<ComputedFields> {
    let institution = *emitter.institution();
    let codec = institution.codec();
    let our_number = codec.build_our_number(emitter, facts)?;
    let free_field = codec.build_free_field(emitter, facts)?;
    if free_field.len() != 25 {
        return Err(Error::FieldOverflow { value: free_field, width: 25 });
    }
    let barcode = assemble(institution, facts.due_date(), facts.amount(), &free_field)?;
    let digitable_line = digitable_line(&barcode)?;
    let render_hints = codec.render_hints(emitter, facts)?.into_iter().collect();
    Ok(ComputedFields::new(
        our_number,
        free_field,
        barcode,
        digitable_line,
        codec.format_agency(emitter),
        codec.format_account(emitter),
        render_hints,
    ))
}
