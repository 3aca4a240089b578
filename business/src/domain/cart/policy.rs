use std::time::Duration;

/// What happens to reserved stock when a line is removed with a zero quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalPolicy {
    /// The line's whole quantity goes back to stock, like a decrease to zero.
    #[default]
    Restock,
    /// The line is deleted and stock is left untouched.
    Retain,
}

impl std::str::FromStr for RemovalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restock" => Ok(RemovalPolicy::Restock),
            "retain" => Ok(RemovalPolicy::Retain),
            _ => Err(format!("Invalid removal policy: {}", s)),
        }
    }
}

/// How the initial items of a new cart are committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreationMode {
    /// Header first, then one transaction per item. Items committed before
    /// a failing one stay in the cart.
    #[default]
    BestEffort,
    /// Header and every item in a single transaction.
    Atomic,
}

impl std::str::FromStr for CreationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best_effort" => Ok(CreationMode::BestEffort),
            "atomic" => Ok(CreationMode::Atomic),
            _ => Err(format!("Invalid creation mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartPolicy {
    pub removal: RemovalPolicy,
    pub creation: CreationMode,
    /// Deadline for a single mutation transaction.
    pub mutation_timeout: Duration,
}

impl Default for CartPolicy {
    fn default() -> Self {
        Self {
            removal: RemovalPolicy::default(),
            creation: CreationMode::default(),
            mutation_timeout: Duration::from_secs(5),
        }
    }
}
