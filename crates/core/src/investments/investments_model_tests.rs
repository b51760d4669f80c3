//! Tests for investment domain models and valuation math.

#[cfg(test)]
mod tests {
    use crate::investments::{Investment, InvestmentKind, NewInvestment};
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn investment(quantity: Decimal, purchase: Decimal, current: Decimal) -> Investment {
        let now = Utc::now().naive_utc();
        Investment {
            id: "inv-1".to_string(),
            account_id: "acc-1".to_string(),
            symbol: "PETR4".to_string(),
            name: "Petrobras PN".to_string(),
            kind: InvestmentKind::Stock,
            quantity,
            purchase_price: purchase,
            current_price: current,
            purchase_date: now,
            last_update: now,
        }
    }

    #[test]
    fn test_current_and_invested_value() {
        let inv = investment(dec!(100), dec!(30.00), dec!(38.50));
        assert_eq!(inv.invested_value(), dec!(3000.00));
        assert_eq!(inv.current_value(), dec!(3850.00));
    }

    #[test]
    fn test_gain_loss() {
        let inv = investment(dec!(100), dec!(30.00), dec!(38.50));
        assert_eq!(inv.gain_loss(), dec!(850.00));
        assert_eq!(inv.gain_loss_percent(), dec!(28.33));
    }

    #[test]
    fn test_loss_is_negative() {
        let inv = investment(dec!(10), dec!(50.00), dec!(40.00));
        assert_eq!(inv.gain_loss(), dec!(-100.00));
        assert_eq!(inv.gain_loss_percent(), dec!(-20.00));
    }

    #[test]
    fn test_gain_loss_percent_with_zero_invested() {
        let inv = investment(dec!(0), dec!(50.00), dec!(40.00));
        assert_eq!(inv.gain_loss_percent(), Decimal::ZERO);
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let inv = investment(dec!(1), dec!(1), dec!(1));
        let json = serde_json::to_string(&inv).unwrap();
        assert!(json.contains("\"type\":\"STOCK\""));
        assert!(json.contains("\"accountId\""));
    }

    // ==================== NewInvestment validation ====================

    fn new_investment() -> NewInvestment {
        NewInvestment {
            account_id: "acc-1".to_string(),
            symbol: " petr4 ".to_string(),
            kind: InvestmentKind::Stock,
            quantity: dec!(100),
            purchase_price: dec!(30.00),
            purchase_date: None,
        }
    }

    #[test]
    fn test_valid_new_investment_passes() {
        assert!(new_investment().validate().is_ok());
    }

    #[test]
    fn test_normalized_symbol_trims_and_uppercases() {
        assert_eq!(new_investment().normalized_symbol(), "PETR4");
    }

    #[test]
    fn test_zero_quantity_fails() {
        let mut inv = new_investment();
        inv.quantity = Decimal::ZERO;
        assert!(inv.validate().is_err());
    }

    #[test]
    fn test_negative_purchase_price_fails() {
        let mut inv = new_investment();
        inv.purchase_price = dec!(-1);
        assert!(inv.validate().is_err());
    }

    #[test]
    fn test_blank_symbol_fails() {
        let mut inv = new_investment();
        inv.symbol = "  ".to_string();
        assert!(inv.validate().is_err());
    }
}
