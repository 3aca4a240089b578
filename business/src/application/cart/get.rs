use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::orchestrator::{cart_not_found, resolve_cart_id};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!("Fetching {}", params.cart));

        let cart_id = resolve_cart_id(self.repository.as_ref(), &params.cart).await?;
        let header = self
            .repository
            .get_header(cart_id)
            .await
            .map_err(cart_not_found)?;
        let items = self.repository.list_lines(cart_id).await?;

        Ok(Cart { header, items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartRef, LineItemView};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::OwnerPhone;
    use crate::test_doubles::{MockCartRepo, header, mock_logger, tier_prices};
    use bigdecimal::BigDecimal;

    #[tokio::test]
    async fn should_return_empty_cart_for_new_owner() {
        let mut repo = MockCartRepo::new();
        repo.expect_find_id_by_owner().returning(|_| Ok(Some(3)));
        repo.expect_get_header()
            .returning(|cart_id| Ok(header(cart_id, "555")));
        repo.expect_list_lines().returning(|_| Ok(vec![]));

        let use_case = GetCartUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(GetCartParams {
                cart: CartRef::Owner(OwnerPhone::parse("555").unwrap()),
            })
            .await
            .unwrap();

        assert_eq!(cart.header.id, 3);
        assert!(cart.items.is_empty());
        assert_eq!(cart.total(), BigDecimal::from(0));
    }

    #[tokio::test]
    async fn should_return_priced_lines() {
        let mut repo = MockCartRepo::new();
        repo.expect_get_header()
            .returning(|cart_id| Ok(header(cart_id, "555")));
        repo.expect_list_lines().returning(|_| {
            Ok(vec![LineItemView::resolve(
                1,
                "Denim Jacket".to_string(),
                50,
                &tier_prices(),
            )])
        });

        let use_case = GetCartUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(GetCartParams {
                cart: CartRef::Id(3),
            })
            .await
            .unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total(), BigDecimal::from(600));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_cart_id() {
        let mut repo = MockCartRepo::new();
        repo.expect_get_header()
            .returning(|_| Err(RepositoryError::NotFound));
        repo.expect_list_lines().times(0);

        let use_case = GetCartUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartParams {
                cart: CartRef::Id(404),
            })
            .await;

        assert!(matches!(result, Err(CartError::CartNotFound)));
    }
}
