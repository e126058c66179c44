//! # Derived Mint State
//!
//! Pure functions turning gateway reads into the view state of the mint
//! screen: eligibility flags, quantity bounds, price formatting, and
//! ineligibility text. No I/O, no locks; everything here is a plain
//! function over values, tested in isolation.

pub mod eligibility;
pub mod ineligibility;
pub mod label;
pub mod units;

pub use eligibility::{
    clamp_quantity, derive_flags, resolve_max_claimable, selector_upper_bound, DropFlags,
};
pub use ineligibility::parse_ineligibility;
pub use label::mint_button_label;
pub use units::{format_units, parse_units, UnitsError};
