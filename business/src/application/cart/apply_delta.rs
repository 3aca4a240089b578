use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::orchestrator::{apply_in_transaction, resolve_cart_id};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartChange;
use crate::domain::cart::policy::CartPolicy;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::apply_delta::{ApplyCartDeltaParams, ApplyCartDeltaUseCase};
use crate::domain::logger::Logger;
use crate::domain::pricing::delta::CartDelta;

pub struct ApplyCartDeltaUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub policy: CartPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ApplyCartDeltaUseCase for ApplyCartDeltaUseCaseImpl {
    async fn execute(&self, params: ApplyCartDeltaParams) -> Result<CartChange, CartError> {
        self.logger.info(&format!(
            "Applying {} units of product {} to {}",
            params.quantity, params.product_id, params.cart
        ));

        let delta = CartDelta::from_signed(params.quantity)?;
        let cart_id = resolve_cart_id(self.repository.as_ref(), &params.cart).await?;

        let result = apply_in_transaction(
            self.repository.as_ref(),
            &self.policy,
            cart_id,
            params.product_id,
            delta,
        )
        .await;

        match &result {
            Ok(change) => self.logger.info(&format!(
                "Cart {} product {} {}, line quantity now {}",
                cart_id,
                change.product_id(),
                change.status(),
                change.line_quantity()
            )),
            Err(err) => self.logger.warn(&format!(
                "Cart {} product {} rejected: {}",
                cart_id,
                params.product_id,
                err.detail()
            )),
        }

        result
    }
}
