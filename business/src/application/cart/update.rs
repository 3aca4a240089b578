use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::orchestrator::apply_in_transaction;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartChange;
use crate::domain::cart::policy::CartPolicy;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update::{UpdateCartParams, UpdateCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::pricing::delta::CartDelta;

/// Applies a list of signed deltas to a cart the owner must hold.
///
/// Every item runs in its own transaction; processing stops at the first
/// failure and earlier items stay applied.
pub struct UpdateCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub policy: CartPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartUseCase for UpdateCartUseCaseImpl {
    async fn execute(&self, params: UpdateCartParams) -> Result<Vec<CartChange>, CartError> {
        self.logger.info(&format!(
            "Updating cart {} for owner {} with {} item(s)",
            params.cart_id,
            params.owner,
            params.items.len()
        ));

        let deltas = params
            .items
            .iter()
            .map(|item| CartDelta::from_signed(item.quantity).map(|delta| (item.product_id, delta)))
            .collect::<Result<Vec<_>, _>>()?;

        let owned_cart = self
            .repository
            .find_id_by_owner(&params.owner)
            .await?
            .ok_or(CartError::CartNotFound)?;
        if owned_cart != params.cart_id {
            return Err(CartError::CartOwnerMismatch);
        }

        let mut changes = Vec::with_capacity(deltas.len());
        for (product_id, delta) in deltas {
            match apply_in_transaction(
                self.repository.as_ref(),
                &self.policy,
                params.cart_id,
                product_id,
                delta,
            )
            .await
            {
                Ok(change) => changes.push(change),
                Err(err) => {
                    self.logger.warn(&format!(
                        "Cart {} update stopped at product {} after {} change(s): {}",
                        params.cart_id,
                        product_id,
                        changes.len(),
                        err.detail()
                    ));
                    return Err(err);
                }
            }
        }

        self.logger
            .info(&format!("Cart {} updated", params.cart_id));
        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartItemDelta;
    use crate::domain::shared::value_objects::OwnerPhone;
    use crate::test_doubles::{MockCartRepo, MockUow, boxed, header, line, mock_logger};
    use std::sync::Mutex;

    fn params(cart_id: i64, items: Vec<CartItemDelta>) -> UpdateCartParams {
        UpdateCartParams {
            cart_id,
            owner: OwnerPhone::parse("2284").unwrap(),
            items,
        }
    }

    fn use_case(repo: MockCartRepo) -> UpdateCartUseCaseImpl {
        UpdateCartUseCaseImpl {
            repository: Arc::new(repo),
            policy: CartPolicy::default(),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_reject_cart_of_another_owner() {
        let mut repo = MockCartRepo::new();
        repo.expect_find_id_by_owner().returning(|_| Ok(Some(8)));
        repo.expect_begin().times(0);

        let result = use_case(repo)
            .execute(params(
                7,
                vec![CartItemDelta {
                    product_id: 1,
                    quantity: 50,
                }],
            ))
            .await;

        assert!(matches!(result, Err(CartError::CartOwnerMismatch)));
    }

    #[tokio::test]
    async fn should_fail_when_owner_has_no_cart() {
        let mut repo = MockCartRepo::new();
        repo.expect_find_id_by_owner().returning(|_| Ok(None));

        let result = use_case(repo).execute(params(7, vec![])).await;

        assert!(matches!(result, Err(CartError::CartNotFound)));
    }

    #[tokio::test]
    async fn should_validate_every_quantity_before_applying_any() {
        let mut repo = MockCartRepo::new();
        repo.expect_find_id_by_owner().times(0);
        repo.expect_begin().times(0);

        let result = use_case(repo)
            .execute(params(
                7,
                vec![
                    CartItemDelta {
                        product_id: 1,
                        quantity: 50,
                    },
                    CartItemDelta {
                        product_id: 2,
                        quantity: -3,
                    },
                ],
            ))
            .await;

        assert!(matches!(result, Err(CartError::InvalidLotSize(-3))));
    }

    #[tokio::test]
    async fn should_apply_items_in_order() {
        let mut remove = MockUow::new();
        remove
            .expect_get_or_fail()
            .returning(|cart_id| Ok(header(cart_id, "2284")));
        remove.expect_delete_line().returning(|_, _| Ok(None));
        remove.expect_commit().times(1).returning(|| Ok(()));

        let mut add = MockUow::new();
        add.expect_get_or_fail()
            .returning(|cart_id| Ok(header(cart_id, "2284")));
        add.expect_reserve().returning(|_, _| {
            Ok(crate::domain::cart::repository::StockReservation::Reserved { remaining: 0 })
        });
        add.expect_upsert_line()
            .returning(|cart_id, product_id, delta| Ok(line(cart_id, product_id, delta)));
        add.expect_commit().times(1).returning(|| Ok(()));

        let pending = Mutex::new(vec![remove, add]);
        let mut repo = MockCartRepo::new();
        repo.expect_find_id_by_owner().returning(|_| Ok(Some(7)));
        repo.expect_begin()
            .times(2)
            .returning(move || Ok(boxed(pending.lock().unwrap().pop().unwrap())));

        let changes = use_case(repo)
            .execute(params(
                7,
                vec![
                    CartItemDelta {
                        product_id: 1,
                        quantity: 200,
                    },
                    CartItemDelta {
                        product_id: 2,
                        quantity: 0,
                    },
                ],
            ))
            .await
            .unwrap();

        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].status(), "added");
        assert_eq!(changes[1].status(), "removed");
        assert_eq!(changes[1].product_id(), 2);
    }
}
