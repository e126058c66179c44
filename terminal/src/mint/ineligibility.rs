//! Human-readable text for claim ineligibility reasons.

use shared::dto::drop::IneligibilityReason;

/// Map ineligibility reasons to a single display sentence.
///
/// The first reason wins; the quantity only affects pluralization. Output
/// is fixed and locale-free so the button text is deterministic for a given
/// input. An empty reason list produces an empty string (the caller shows a
/// price label instead).
pub fn parse_ineligibility(reasons: &[IneligibilityReason], quantity: u64) -> String {
    let Some(reason) = reasons.first() else {
        return String::new();
    };

    match reason {
        IneligibilityReason::NoActiveClaimPhase
        | IneligibilityReason::NoClaimConditionSet
        | IneligibilityReason::Unknown => "This drop is not ready to be minted.".to_string(),
        IneligibilityReason::NotEnoughSupply => {
            if quantity > 1 {
                format!("There is not enough supply to mint {} tokens.", quantity)
            } else {
                "There is not enough supply left to mint.".to_string()
            }
        }
        IneligibilityReason::AddressNotAllowed => {
            if quantity > 1 {
                format!("You are not eligible to mint {} tokens.", quantity)
            } else {
                "You are not eligible to mint at this time.".to_string()
            }
        }
        IneligibilityReason::NotEnoughBalance => "You don't have enough funds to mint.".to_string(),
        IneligibilityReason::AlreadyClaimed => {
            "You have already claimed the maximum allowed.".to_string()
        }
        IneligibilityReason::WaitBeforeNextClaim => {
            "You need to wait before you can claim again.".to_string()
        }
        IneligibilityReason::NoWallet => "No wallet connected.".to_string(),
    }
}
