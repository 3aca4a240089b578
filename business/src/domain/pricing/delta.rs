use super::errors::PricingError;
use super::lot::LotSize;

/// A signed cart quantity classified by intent.
///
/// Positive quantities add, negative quantities decrease and zero removes
/// the line. Add and decrease carry the validated absolute lot; removal
/// bypasses lot validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartDelta {
    Add(LotSize),
    Decrease(LotSize),
    Remove,
}

impl CartDelta {
    pub fn from_signed(quantity: i32) -> Result<Self, PricingError> {
        if quantity == 0 {
            return Ok(CartDelta::Remove);
        }

        let lot = LotSize::from_units(quantity.unsigned_abs())
            .map_err(|_| PricingError::InvalidLotSize(quantity))?;

        if quantity > 0 {
            Ok(CartDelta::Add(lot))
        } else {
            Ok(CartDelta::Decrease(lot))
        }
    }
}

/// Validates a requested quantity.
///
/// Returns `None` for the zero sentinel (remove), otherwise the lot of the
/// absolute value.
pub fn validate_quantity(quantity: i32) -> Result<Option<LotSize>, PricingError> {
    match CartDelta::from_signed(quantity)? {
        CartDelta::Add(lot) | CartDelta::Decrease(lot) => Ok(Some(lot)),
        CartDelta::Remove => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_classify_positive_quantity_as_add() {
        assert_eq!(
            CartDelta::from_signed(100),
            Ok(CartDelta::Add(LotSize::OneHundred))
        );
    }

    #[test]
    fn should_validate_absolute_value_of_decrease() {
        assert_eq!(
            CartDelta::from_signed(-200),
            Ok(CartDelta::Decrease(LotSize::TwoHundred))
        );
    }

    #[test]
    fn should_treat_zero_as_remove() {
        assert_eq!(CartDelta::from_signed(0), Ok(CartDelta::Remove));
        assert_eq!(validate_quantity(0), Ok(None));
    }

    #[test]
    fn should_keep_signed_quantity_in_rejection() {
        assert_eq!(
            CartDelta::from_signed(-75),
            Err(PricingError::InvalidLotSize(-75))
        );
    }

    #[test]
    fn should_not_overflow_on_minimum_quantity() {
        assert!(CartDelta::from_signed(i32::MIN).is_err());
    }

    proptest! {
        #[test]
        fn should_reject_signed_quantities_outside_the_lots(quantity in any::<i32>()) {
            let magnitude = quantity.unsigned_abs();
            prop_assume!(quantity != 0 && magnitude != 50 && magnitude != 100 && magnitude != 200);
            prop_assert_eq!(
                validate_quantity(quantity),
                Err(PricingError::InvalidLotSize(quantity))
            );
        }
    }
}
