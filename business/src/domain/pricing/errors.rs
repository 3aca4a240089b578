#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    /// The absolute quantity is not one of the sellable lots.
    #[error("pricing.invalid_lot_size")]
    InvalidLotSize(i32),
}
