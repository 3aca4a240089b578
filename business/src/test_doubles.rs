//! Shared mockall doubles for the business ports.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;
use mockall::mock;

use crate::domain::cart::model::{CartHeader, CartId, LineItem, LineItemView};
use crate::domain::cart::repository::{
    CartRepository, CartStore, CartUnitOfWork, InventoryLedger, StockReservation,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::pricing::lot::TierPrices;
use crate::domain::product::filter::ProductFilter;
use crate::domain::product::model::{Product, ProductId};
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::OwnerPhone;

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
        async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
    }
}

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn find_id_by_owner(&self, owner: &OwnerPhone) -> Result<Option<CartId>, RepositoryError>;
        async fn get_header(&self, cart_id: CartId) -> Result<CartHeader, RepositoryError>;
        async fn list_lines(&self, cart_id: CartId) -> Result<Vec<LineItemView>, RepositoryError>;
        async fn begin(&self) -> Result<Box<dyn CartUnitOfWork>, RepositoryError>;
    }
}

mock! {
    pub Uow {}

    #[async_trait]
    impl InventoryLedger for Uow {
        async fn reserve(&mut self, product_id: ProductId, quantity: i32) -> Result<StockReservation, RepositoryError>;
        async fn release(&mut self, product_id: ProductId, quantity: i32) -> Result<i32, RepositoryError>;
    }

    #[async_trait]
    impl CartStore for Uow {
        async fn create_header(&mut self, owner: &OwnerPhone) -> Result<CartHeader, RepositoryError>;
        async fn get_or_fail(&mut self, cart_id: CartId) -> Result<CartHeader, RepositoryError>;
        async fn find_line(&mut self, cart_id: CartId, product_id: ProductId) -> Result<Option<LineItem>, RepositoryError>;
        async fn upsert_line(&mut self, cart_id: CartId, product_id: ProductId, delta: i32) -> Result<LineItem, RepositoryError>;
        async fn decrement_line(&mut self, cart_id: CartId, product_id: ProductId, quantity: i32) -> Result<LineItem, RepositoryError>;
        async fn delete_line(&mut self, cart_id: CartId, product_id: ProductId) -> Result<Option<LineItem>, RepositoryError>;
    }

    #[async_trait]
    impl CartUnitOfWork for Uow {
        async fn commit(&mut self) -> Result<(), RepositoryError>;
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn boxed(uow: MockUow) -> Box<dyn CartUnitOfWork> {
    Box::new(uow)
}

pub fn tier_prices() -> TierPrices {
    TierPrices {
        tier_a: BigDecimal::from_str("12.00").unwrap(),
        tier_b: BigDecimal::from_str("11.00").unwrap(),
        tier_c: BigDecimal::from_str("10.00").unwrap(),
    }
}

pub fn product(id: ProductId, name: &str, stock: i32) -> Product {
    Product::from_repository(
        id,
        name.to_string(),
        None,
        Some("apparel".to_string()),
        None,
        None,
        stock,
        tier_prices(),
    )
}

pub fn header(id: CartId, owner: &str) -> CartHeader {
    let now = Utc::now();
    CartHeader {
        id,
        owner: OwnerPhone::from_repository(owner),
        created_at: now,
        updated_at: now,
    }
}

pub fn line(cart_id: CartId, product_id: ProductId, quantity: i32) -> LineItem {
    LineItem {
        cart_id,
        product_id,
        quantity,
    }
}
