use anyhow::{Context, anyhow};
use business::domain::cart::policy::{CartPolicy, CreationMode, RemovalPolicy};
use std::{env, time::Duration};

/// Load cart mutation policy from environment variables
///
/// Environment variables:
/// - CART_REMOVAL_POLICY: "restock" or "retain" (default: "restock")
/// - CART_CREATION_MODE: "best_effort" or "atomic" (default: "best_effort")
/// - CART_MUTATION_TIMEOUT_MS: Deadline per mutation transaction (default: 5000)
pub fn load_cart_policy() -> anyhow::Result<CartPolicy> {
    parse_cart_policy(
        env::var("CART_REMOVAL_POLICY").ok(),
        env::var("CART_CREATION_MODE").ok(),
        env::var("CART_MUTATION_TIMEOUT_MS").ok(),
    )
}

fn parse_cart_policy(
    removal: Option<String>,
    creation: Option<String>,
    timeout_ms: Option<String>,
) -> anyhow::Result<CartPolicy> {
    let mut policy = CartPolicy::default();

    if let Some(raw) = removal {
        policy.removal = raw.trim().parse::<RemovalPolicy>().map_err(|e| anyhow!(e))?;
    }
    if let Some(raw) = creation {
        policy.creation = raw.trim().parse::<CreationMode>().map_err(|e| anyhow!(e))?;
    }
    if let Some(raw) = timeout_ms {
        let millis: u64 = raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid CART_MUTATION_TIMEOUT_MS: {}", raw))?;
        if millis == 0 {
            return Err(anyhow!("CART_MUTATION_TIMEOUT_MS must be greater than zero"));
        }
        policy.mutation_timeout = Duration::from_millis(millis);
    }

    Ok(policy)
}
