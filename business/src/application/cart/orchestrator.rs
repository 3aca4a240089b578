//! Cart mutation state machine shared by the cart use cases.
//!
//! Every mutation runs inside one `CartUnitOfWork`: the stock change and the
//! line change are committed together or not at all.

use std::future::Future;
use std::time::Duration;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartChange, CartId, CartRef};
use crate::domain::cart::policy::{CartPolicy, RemovalPolicy};
use crate::domain::cart::repository::{CartRepository, CartUnitOfWork, StockReservation};
use crate::domain::errors::RepositoryError;
use crate::domain::pricing::delta::CartDelta;
use crate::domain::product::model::ProductId;

/// Runs `operation` under a deadline. On expiry the future is dropped, which
/// rolls back any transaction it holds.
pub(crate) async fn within_deadline<T, F>(timeout: Duration, operation: F) -> Result<T, CartError>
where
    F: Future<Output = Result<T, CartError>>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(result) => result,
        Err(_) => Err(CartError::StorageUnavailable(RepositoryError::Timeout)),
    }
}

pub(crate) fn cart_not_found(err: RepositoryError) -> CartError {
    match err {
        RepositoryError::NotFound => CartError::CartNotFound,
        other => CartError::StorageUnavailable(other),
    }
}

fn product_not_found(product_id: ProductId) -> impl FnOnce(RepositoryError) -> CartError {
    move |err| match err {
        RepositoryError::NotFound => CartError::ProductNotFound(product_id),
        other => CartError::StorageUnavailable(other),
    }
}

/// Resolves a cart reference to an id. Ids are checked later, inside the
/// mutation transaction.
pub(crate) async fn resolve_cart_id(
    repository: &dyn CartRepository,
    cart: &CartRef,
) -> Result<CartId, CartError> {
    match cart {
        CartRef::Id(id) => Ok(*id),
        CartRef::Owner(owner) => repository
            .find_id_by_owner(owner)
            .await?
            .ok_or(CartError::CartNotFound),
    }
}

/// Applies one classified delta through an open unit of work.
pub(crate) async fn apply_delta(
    uow: &mut dyn CartUnitOfWork,
    cart_id: CartId,
    product_id: ProductId,
    delta: CartDelta,
    removal: RemovalPolicy,
) -> Result<CartChange, CartError> {
    match delta {
        CartDelta::Add(lot) => {
            let quantity = lot.units();
            let reservation = uow
                .reserve(product_id, quantity)
                .await
                .map_err(product_not_found(product_id))?;

            if let StockReservation::Insufficient { available } = reservation {
                return Err(CartError::InsufficientStock {
                    product_id,
                    requested: quantity,
                    available,
                });
            }

            let line = uow.upsert_line(cart_id, product_id, quantity).await?;
            Ok(CartChange::Added {
                product_id,
                added: quantity,
                line_quantity: line.quantity,
            })
        }
        CartDelta::Decrease(lot) => {
            let quantity = lot.units();
            let current = uow
                .find_line(cart_id, product_id)
                .await?
                .ok_or(CartError::ItemNotInCart { product_id })?;

            if current.quantity < quantity {
                return Err(CartError::InsufficientCartQuantity {
                    product_id,
                    requested: quantity,
                    in_cart: current.quantity,
                });
            }

            let remaining = if current.quantity == quantity {
                uow.delete_line(cart_id, product_id).await?;
                0
            } else {
                let line = uow.decrement_line(cart_id, product_id, quantity).await?;
                if line.quantity <= 0 {
                    uow.delete_line(cart_id, product_id).await?;
                    0
                } else {
                    line.quantity
                }
            };

            uow.release(product_id, quantity)
                .await
                .map_err(product_not_found(product_id))?;

            Ok(CartChange::Decreased {
                product_id,
                removed: quantity,
                line_quantity: remaining,
            })
        }
        CartDelta::Remove => {
            let removed = uow.delete_line(cart_id, product_id).await?;
            let released = match (removal, removed) {
                (RemovalPolicy::Restock, Some(line)) if line.quantity > 0 => {
                    uow.release(product_id, line.quantity)
                        .await
                        .map_err(product_not_found(product_id))?;
                    line.quantity
                }
                _ => 0,
            };

            Ok(CartChange::Removed {
                product_id,
                released,
            })
        }
    }
}

/// Opens a transaction, checks the cart, applies the delta and commits.
pub(crate) async fn apply_in_transaction(
    repository: &dyn CartRepository,
    policy: &CartPolicy,
    cart_id: CartId,
    product_id: ProductId,
    delta: CartDelta,
) -> Result<CartChange, CartError> {
    within_deadline(policy.mutation_timeout, async {
        let mut uow = repository.begin().await?;
        uow.get_or_fail(cart_id).await.map_err(cart_not_found)?;
        let change = apply_delta(uow.as_mut(), cart_id, product_id, delta, policy.removal).await?;
        uow.commit().await?;
        Ok(change)
    })
    .await
}
