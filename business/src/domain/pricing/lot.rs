use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::errors::PricingError;

/// A fixed purchasable quantity. Products are only sold in these increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LotSize {
    Fifty,
    OneHundred,
    TwoHundred,
}

impl LotSize {
    pub const ALL: [LotSize; 3] = [LotSize::Fifty, LotSize::OneHundred, LotSize::TwoHundred];

    pub fn units(self) -> i32 {
        match self {
            LotSize::Fifty => 50,
            LotSize::OneHundred => 100,
            LotSize::TwoHundred => 200,
        }
    }

    pub fn tier(self) -> PriceTier {
        match self {
            LotSize::Fifty => PriceTier::A,
            LotSize::OneHundred => PriceTier::B,
            LotSize::TwoHundred => PriceTier::C,
        }
    }

    /// Validates an absolute quantity against the allowed lots.
    pub fn from_units(units: u32) -> Result<Self, PricingError> {
        match units {
            50 => Ok(LotSize::Fifty),
            100 => Ok(LotSize::OneHundred),
            200 => Ok(LotSize::TwoHundred),
            other => Err(PricingError::InvalidLotSize(
                i32::try_from(other).unwrap_or(i32::MAX),
            )),
        }
    }
}

impl std::fmt::Display for LotSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.units())
    }
}

/// Price tier applied to a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceTier {
    A,
    B,
    C,
}

impl PriceTier {
    /// Resolves the tier from a stored line quantity.
    ///
    /// Accumulated quantities that are not a lot (150, 250, ...) fall back
    /// to tier A.
    pub fn for_quantity(quantity: i32) -> Self {
        u32::try_from(quantity)
            .ok()
            .and_then(|units| LotSize::from_units(units).ok())
            .map(LotSize::tier)
            .unwrap_or(PriceTier::A)
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceTier::A => write!(f, "a"),
            PriceTier::B => write!(f, "b"),
            PriceTier::C => write!(f, "c"),
        }
    }
}

/// Unit prices of a product for each lot size.
#[derive(Debug, Clone, PartialEq)]
pub struct TierPrices {
    pub tier_a: BigDecimal,
    pub tier_b: BigDecimal,
    pub tier_c: BigDecimal,
}

impl TierPrices {
    pub fn price_for(&self, tier: PriceTier) -> &BigDecimal {
        match tier {
            PriceTier::A => &self.tier_a,
            PriceTier::B => &self.tier_b,
            PriceTier::C => &self.tier_c,
        }
    }

    pub fn unit_price_for_quantity(&self, quantity: i32) -> &BigDecimal {
        self.price_for(PriceTier::for_quantity(quantity))
    }
}
