//! The action button's label, derived from the current drop state.

use shared::dto::drop::{ClaimCondition, IneligibilityReason};

use crate::mint::eligibility::DropFlags;
use crate::mint::ineligibility::parse_ineligibility;
use crate::mint::units::{format_units, parse_units};

/// Label for the single call-to-action button.
///
/// Sold out beats everything; a claimable state shows the quantity and the
/// total price; otherwise the ineligibility text (or a generic fallback)
/// explains why the button is disabled.
pub fn mint_button_label(
    flags: &DropFlags,
    condition: Option<&ClaimCondition>,
    reasons: &[IneligibilityReason],
    quantity: u64,
) -> String {
    if flags.sold_out {
        return "Sold out".to_string();
    }

    if flags.claimable {
        let mut label = String::from("Mint");
        if quantity > 1 {
            label.push_str(&format!(" {}", quantity));
        }
        if let Some(condition) = condition {
            label.push_str(&price_suffix(condition, quantity));
        }
        return label;
    }

    if !reasons.is_empty() {
        return parse_ineligibility(reasons, quantity);
    }

    "Minting unavailable".to_string()
}

/// Total price fragment: " (Free)" for a zero price, " (0.15 SOL)" style
/// otherwise, empty when the price cannot be computed
fn price_suffix(condition: &ClaimCondition, quantity: u64) -> String {
    let currency = &condition.currency_metadata;
    let display = if currency.display_value.is_empty() {
        "0"
    } else {
        currency.display_value.as_str()
    };

    let Ok(unit_price) = parse_units(display, currency.decimals) else {
        return String::new();
    };
    if unit_price == 0 {
        return " (Free)".to_string();
    }
    let Some(total) = unit_price.checked_mul(quantity as u128) else {
        return String::new();
    };

    format!(
        " ({} {})",
        format_units(total, currency.decimals),
        currency.symbol
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::drop::CurrencyMetadata;

    fn condition(display_value: &str, decimals: u8, symbol: &str) -> ClaimCondition {
        ClaimCondition {
            start_time: "2024-06-01T00:00:00Z".parse().unwrap(),
            available_supply: "100".to_string(),
            quantity_limit_per_transaction: Some("5".to_string()),
            price: "0".to_string(),
            currency_metadata: CurrencyMetadata {
                name: symbol.to_string(),
                symbol: symbol.to_string(),
                decimals,
                display_value: display_value.to_string(),
            },
            snapshot: None,
        }
    }

    fn claimable_flags() -> DropFlags {
        DropFlags {
            sold_out: false,
            no_active_phase: false,
            not_ready: false,
            claimable: true,
        }
    }

    #[test]
    fn test_total_price_for_quantity_three() {
        let c = condition("0.05", 18, "ETH");
        let label = mint_button_label(&claimable_flags(), Some(&c), &[], 3);
        assert_eq!(label, "Mint 3 (0.15 ETH)");
    }

    #[test]
    fn test_zero_price_renders_free() {
        let c = condition("0", 18, "ETH");
        let label = mint_button_label(&claimable_flags(), Some(&c), &[], 1);
        assert_eq!(label, "Mint (Free)");
    }

    #[test]
    fn test_missing_display_value_renders_free() {
        let c = condition("", 18, "ETH");
        let label = mint_button_label(&claimable_flags(), Some(&c), &[], 1);
        assert_eq!(label, "Mint (Free)");
    }

    #[test]
    fn test_unparseable_price_omits_suffix() {
        let c = condition("n/a", 18, "ETH");
        let label = mint_button_label(&claimable_flags(), Some(&c), &[], 2);
        assert_eq!(label, "Mint 2");
    }

    #[test]
    fn test_sold_out_beats_reasons() {
        let flags = DropFlags {
            sold_out: true,
            no_active_phase: false,
            not_ready: false,
            claimable: false,
        };
        let c = condition("0.05", 18, "ETH");
        let label = mint_button_label(
            &flags,
            Some(&c),
            &[IneligibilityReason::NotEnoughSupply],
            1,
        );
        assert_eq!(label, "Sold out");
    }

    #[test]
    fn test_reasons_produce_ineligibility_text() {
        let flags = DropFlags {
            sold_out: false,
            no_active_phase: false,
            not_ready: false,
            claimable: false,
        };
        let c = condition("0.05", 18, "ETH");
        let label = mint_button_label(
            &flags,
            Some(&c),
            &[IneligibilityReason::NotEnoughSupply],
            5,
        );
        assert_eq!(label, "There is not enough supply to mint 5 tokens.");
    }

    #[test]
    fn test_no_phase_without_reasons_is_unavailable() {
        let flags = DropFlags {
            sold_out: false,
            no_active_phase: true,
            not_ready: false,
            claimable: false,
        };
        assert_eq!(mint_button_label(&flags, None, &[], 1), "Minting unavailable");
    }
}
