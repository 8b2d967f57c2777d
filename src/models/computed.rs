//! Computed fields are the output side of the engine: the strings the
//! rendering layer prints verbatim. They are derived on demand and safe to
//! discard and recompute; nothing in here is persisted by this crate.

use getset::Getters;
use std::collections::BTreeMap;

/// Everything the rendering layer needs, already computed. The renderer
/// must not reinterpret or recompute any of these strings.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct ComputedFields {
    /// The institution's identifier for this billet, display form (may
    /// contain `-` / `/` separators)
    our_number: String,
    /// Positions 20-44 of the barcode, exactly 25 digits
    free_field: String,
    /// The full barcode, exactly 44 digits
    barcode: String,
    /// The barcode re-grouped into five human-typable blocks
    digitable_line: String,
    /// Agency in the institution's display form
    agency_display: String,
    /// Account in the institution's display form
    account_display: String,
    /// Complementary rendering hints, e.g. auxiliary digits some
    /// institutions print next to the beneficiary code
    render_hints: BTreeMap<String, String>,
}

impl ComputedFields {
    pub(crate) fn new(our_number: String, free_field: String, barcode: String, digitable_line: String, agency_display: String, account_display: String, render_hints: BTreeMap<String, String>) -> Self {
        Self {
            our_number,
            free_field,
            barcode,
            digitable_line,
            agency_display,
            account_display,
            render_hints,
        }
    }
}

/// Best-effort decomposition of a 25-digit free field back into emitter
/// data. Codecs that implement the inverse fill in what their layout
/// actually carries; everything else stays `None`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct ParsedFreeField {
    pub agency: Option<String>,
    pub account: Option<String>,
    pub wallet: Option<String>,
    pub sequential: Option<String>,
    pub agreement_code: Option<String>,
}
