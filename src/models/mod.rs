//! The models module holds the plain-data records that cross the engine's
//! boundary: the emitter account and billet facts coming in from the caller,
//! and the computed fields going out to the rendering layer. Nothing in here
//! touches a database or a template; these are value types, built once per
//! request and read-only afterward.

pub mod emitter;
pub mod billet;
pub mod computed;

pub use self::{
    emitter::EmitterAccount,
    billet::BilletFacts,
    computed::{ComputedFields, ParsedFreeField},
};
