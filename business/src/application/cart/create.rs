use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::orchestrator::{
    apply_delta, apply_in_transaction, within_deadline,
};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartHeader, CartId, NewCartItem};
use crate::domain::cart::policy::{CartPolicy, CreationMode};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::create::{CreateCartParams, CreateCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::pricing::delta::CartDelta;
use crate::domain::pricing::lot::LotSize;
use crate::domain::product::model::ProductId;
use crate::domain::shared::value_objects::OwnerPhone;

pub struct CreateCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub policy: CartPolicy,
    pub logger: Arc<dyn Logger>,
}

fn initial_lot(item: &NewCartItem) -> Result<(ProductId, LotSize), CartError> {
    match CartDelta::from_signed(item.quantity)? {
        CartDelta::Add(lot) => Ok((item.product_id, lot)),
        CartDelta::Decrease(_) | CartDelta::Remove => Err(CartError::InvalidLotSize(item.quantity)),
    }
}

fn duplicate_owner(err: RepositoryError) -> CartError {
    match err {
        RepositoryError::Duplicated => CartError::CartAlreadyExists,
        other => CartError::StorageUnavailable(other),
    }
}

impl CreateCartUseCaseImpl {
    async fn create_best_effort(
        &self,
        owner: &OwnerPhone,
        lots: &[(ProductId, LotSize)],
    ) -> Result<CartId, CartError> {
        let header: CartHeader = within_deadline(self.policy.mutation_timeout, async {
            let mut uow = self.repository.begin().await?;
            let header = uow.create_header(owner).await.map_err(duplicate_owner)?;
            uow.commit().await?;
            Ok(header)
        })
        .await?;

        for (product_id, lot) in lots {
            if let Err(err) = apply_in_transaction(
                self.repository.as_ref(),
                &self.policy,
                header.id,
                *product_id,
                CartDelta::Add(*lot),
            )
            .await
            {
                self.logger.warn(&format!(
                    "Cart {} keeps the items added before product {} failed: {}",
                    header.id,
                    product_id,
                    err.detail()
                ));
                return Err(err);
            }
        }

        Ok(header.id)
    }

    async fn create_atomic(
        &self,
        owner: &OwnerPhone,
        lots: &[(ProductId, LotSize)],
    ) -> Result<CartId, CartError> {
        within_deadline(self.policy.mutation_timeout, async {
            let mut uow = self.repository.begin().await?;
            let header = uow.create_header(owner).await.map_err(duplicate_owner)?;
            for (product_id, lot) in lots {
                apply_delta(
                    uow.as_mut(),
                    header.id,
                    *product_id,
                    CartDelta::Add(*lot),
                    self.policy.removal,
                )
                .await?;
            }
            uow.commit().await?;
            Ok(header.id)
        })
        .await
    }
}

#[async_trait]
impl CreateCartUseCase for CreateCartUseCaseImpl {
    async fn execute(&self, params: CreateCartParams) -> Result<CartId, CartError> {
        self.logger
            .info(&format!("Creating cart for owner: {}", params.owner));

        let lots = params
            .items
            .iter()
            .map(initial_lot)
            .collect::<Result<Vec<_>, _>>()?;

        if self
            .repository
            .find_id_by_owner(&params.owner)
            .await?
            .is_some()
        {
            return Err(CartError::CartAlreadyExists);
        }

        let cart_id = match self.policy.creation {
            CreationMode::BestEffort => self.create_best_effort(&params.owner, &lots).await?,
            CreationMode::Atomic => self.create_atomic(&params.owner, &lots).await?,
        };

        self.logger.info(&format!(
            "Cart {} created with {} item(s)",
            cart_id,
            lots.len()
        ));
        Ok(cart_id)
    }
}
