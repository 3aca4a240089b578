use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartId;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_id::{GetCartIdParams, GetCartIdUseCase};
use crate::domain::logger::Logger;

pub struct GetCartIdUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartIdUseCase for GetCartIdUseCaseImpl {
    async fn execute(&self, params: GetCartIdParams) -> Result<CartId, CartError> {
        self.logger
            .info(&format!("Looking up cart of owner: {}", params.owner));

        self.repository
            .find_id_by_owner(&params.owner)
            .await?
            .ok_or(CartError::CartNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::OwnerPhone;
    use crate::test_doubles::{MockCartRepo, mock_logger};

    #[tokio::test]
    async fn should_resolve_owner_to_cart_id() {
        let mut repo = MockCartRepo::new();
        repo.expect_find_id_by_owner()
            .withf(|owner| owner.as_str() == "555")
            .returning(|_| Ok(Some(21)));

        let use_case = GetCartIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let cart_id = use_case
            .execute(GetCartIdParams {
                owner: OwnerPhone::parse("555").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(cart_id, 21);
    }

    #[tokio::test]
    async fn should_return_not_found_when_owner_has_no_cart() {
        let mut repo = MockCartRepo::new();
        repo.expect_find_id_by_owner().returning(|_| Ok(None));

        let use_case = GetCartIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartIdParams {
                owner: OwnerPhone::parse("555").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(CartError::CartNotFound)));
    }
}
