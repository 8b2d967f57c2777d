//! The error module holds the one error enum the entire engine speaks.
//!
//! Errors split into two families: validation errors, meaning the caller
//! handed us billet facts an institution does not accept (wrong wallet,
//! wrong agreement-code length, missing required field), and format errors,
//! meaning a codec fed garbage into a checksum or composed a field of the
//! wrong width. Validation errors are the caller's to fix; format errors are
//! bugs inside a codec and should never surface from correct code.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A model builder was missing a required field
    #[error("builder failed: {0}")]
    BuilderFailed(String),
    /// No institution is registered under this clearing-house code
    #[error("unknown bank code: {0}")]
    UnknownBankCode(u16),
    /// The wallet code is not one the institution accepts
    #[error("invalid wallet {wallet} for bank {bank}")]
    InvalidWallet {
        bank: u16,
        wallet: String,
    },
    /// The institution requires an agreement code and none was given
    #[error("missing agreement code for bank {0}")]
    MissingAgreementCode(u16),
    /// An agreement code was given with a length the institution's layout
    /// does not support
    #[error("invalid agreement code length: {0}")]
    InvalidAgreementCodeLength(usize),
    /// The selected wallet requires a customer code and none was given
    #[error("missing customer code for wallet {0}")]
    MissingCustomerCode(String),
    /// The due date encodes to a factor outside the standard's range
    #[error("due date out of range: {0}")]
    DueDateOutOfRange(chrono::NaiveDate),
    /// The face amount cannot be encoded in ten fixed-point digits
    #[error("amount not encodable: {0}")]
    AmountNotEncodable(rust_decimal::Decimal),
    /// A checksum primitive was given empty or non-numeric input
    #[error("non-numeric checksum input: {0:?}")]
    NonNumericInput(String),
    /// A value overflows the fixed width its field allows
    #[error("value {value:?} wider than {width} digits")]
    FieldOverflow {
        value: String,
        width: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
