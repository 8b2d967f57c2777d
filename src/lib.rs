//! This library holds the billet ("boleto") encoding engine: given an
//! emitter account at a registered institution and the facts of one billet,
//! it computes the institution's our-number, the 25-digit free field, the
//! 44-digit FEBRABAN barcode, and the digitable line printed on the slip.
//!
//! The engine is a pure transformation. No I/O, no shared state, no clock:
//! every output is a function of the [EmitterAccount] and [BilletFacts]
//! handed in, so billets can be computed concurrently and recomputed at
//! will. Persistence and rendering live with the caller on either side of
//! this boundary.
//!
//! The usual flow is one call:
//!
//! ```rust
//! use boleto_core::{BilletFacts, EmitterAccount, Institution};
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let emitter = EmitterAccount::builder()
//!     .institution(Institution::Unicred)
//!     .agency("1234")
//!     .agency_digit("5")
//!     .account("567890")
//!     .account_digit("1")
//!     .wallet("21")
//!     .finish()
//!     .unwrap();
//! let facts = BilletFacts::builder()
//!     .sequential(42u64)
//!     .document_number("1001")
//!     .due_date(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap())
//!     .amount(dec!(1234.56))
//!     .finish()
//!     .unwrap();
//! let computed = boleto_core::compute(&emitter, &facts).unwrap();
//! assert_eq!(computed.barcode().len(), 44);
//! ```

pub mod error;
mod util;
pub mod checksum;
pub mod models;
pub mod banks;
pub mod barcode;

pub use crate::{
    banks::{BankCodec, Institution, Wallet, WalletSpec},
    barcode::compute,
    error::{Error, Result},
    models::{BilletFacts, ComputedFields, EmitterAccount, ParsedFreeField},
};
