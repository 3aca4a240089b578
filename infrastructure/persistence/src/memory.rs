//! In-process storage with the same transactional contract as PostgreSQL.
//!
//! A unit of work holds the store lock for its whole lifetime and mutates a
//! staged copy of the state; `commit` publishes the copy, dropping discards it.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use business::domain::cart::model::{CartHeader, CartId, LineItem, LineItemView};
use business::domain::cart::repository::{
    CartRepository, CartStore, CartUnitOfWork, InventoryLedger, StockReservation,
};
use business::domain::errors::RepositoryError;
use business::domain::product::filter::ProductFilter;
use business::domain::product::model::{Product, ProductId};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::OwnerPhone;

#[derive(Debug, Clone, Default)]
struct State {
    products: BTreeMap<ProductId, Product>,
    carts: BTreeMap<CartId, CartHeader>,
    lines: BTreeMap<(CartId, ProductId), i32>,
    next_cart_id: CartId,
}

impl State {
    fn touch(&mut self, cart_id: CartId) {
        if let Some(header) = self.carts.get_mut(&cart_id) {
            header.updated_at = Utc::now();
        }
    }

    fn line(&self, cart_id: CartId, product_id: ProductId) -> Option<LineItem> {
        self.lines
            .get(&(cart_id, product_id))
            .map(|quantity| LineItem {
                cart_id,
                product_id,
                quantity: *quantity,
            })
    }
}

fn matches_filter(product: &Product, filter: &ProductFilter) -> bool {
    let text_matches = filter.text.as_ref().is_none_or(|text| {
        let needle = text.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    });

    text_matches
        && (filter.size.is_none() || filter.size == product.size)
        && (filter.color.is_none() || filter.color == product.color)
        && (filter.category.is_none() || filter.category == product.category)
}

/// Shared in-memory catalog and cart store. Clones share the same state.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_product(&self, product: Product) {
        let mut state = self.state.lock().await;
        state.products.insert(product.id, product);
    }

    pub async fn stock_of(&self, product_id: ProductId) -> Option<i32> {
        let state = self.state.lock().await;
        state.products.get(&product_id).map(|p| p.stock)
    }

    pub async fn line_quantity(&self, cart_id: CartId, product_id: ProductId) -> Option<i32> {
        let state = self.state.lock().await;
        state.lines.get(&(cart_id, product_id)).copied()
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let state = self.state.lock().await;
        state.products.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state
            .products
            .values()
            .filter(|p| matches_filter(p, filter))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CartRepository for InMemoryStore {
    async fn find_id_by_owner(&self, owner: &OwnerPhone) -> Result<Option<CartId>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state
            .carts
            .values()
            .find(|header| &header.owner == owner)
            .map(|header| header.id))
    }

    async fn get_header(&self, cart_id: CartId) -> Result<CartHeader, RepositoryError> {
        let state = self.state.lock().await;
        state.carts.get(&cart_id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn list_lines(&self, cart_id: CartId) -> Result<Vec<LineItemView>, RepositoryError> {
        let state = self.state.lock().await;
        state
            .lines
            .range((cart_id, ProductId::MIN)..=(cart_id, ProductId::MAX))
            .map(|((_, product_id), quantity)| {
                let product = state
                    .products
                    .get(product_id)
                    .ok_or(RepositoryError::DatabaseError)?;
                Ok(LineItemView::resolve(
                    *product_id,
                    product.name.clone(),
                    *quantity,
                    &product.prices,
                ))
            })
            .collect()
    }

    async fn begin(&self) -> Result<Box<dyn CartUnitOfWork>, RepositoryError> {
        let guard = self.state.clone().lock_owned().await;
        let staged = guard.clone();
        Ok(Box::new(InMemoryUnitOfWork {
            guard,
            staged: Some(staged),
        }))
    }
}

pub struct InMemoryUnitOfWork {
    guard: OwnedMutexGuard<State>,
    staged: Option<State>,
}

impl InMemoryUnitOfWork {
    fn staged(&mut self) -> Result<&mut State, RepositoryError> {
        self.staged.as_mut().ok_or(RepositoryError::DatabaseError)
    }
}

#[async_trait]
impl InventoryLedger for InMemoryUnitOfWork {
    async fn reserve(
        &mut self,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<StockReservation, RepositoryError> {
        let product = self
            .staged()?
            .products
            .get_mut(&product_id)
            .ok_or(RepositoryError::NotFound)?;

        if product.stock < quantity {
            return Ok(StockReservation::Insufficient {
                available: product.stock,
            });
        }
        product.stock -= quantity;
        Ok(StockReservation::Reserved {
            remaining: product.stock,
        })
    }

    async fn release(
        &mut self,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<i32, RepositoryError> {
        let product = self
            .staged()?
            .products
            .get_mut(&product_id)
            .ok_or(RepositoryError::NotFound)?;
        product.stock += quantity;
        Ok(product.stock)
    }
}

#[async_trait]
impl CartStore for InMemoryUnitOfWork {
    async fn create_header(&mut self, owner: &OwnerPhone) -> Result<CartHeader, RepositoryError> {
        let state = self.staged()?;
        if state.carts.values().any(|header| &header.owner == owner) {
            return Err(RepositoryError::Duplicated);
        }

        state.next_cart_id += 1;
        let now = Utc::now();
        let header = CartHeader {
            id: state.next_cart_id,
            owner: owner.clone(),
            created_at: now,
            updated_at: now,
        };
        state.carts.insert(header.id, header.clone());
        Ok(header)
    }

    async fn get_or_fail(&mut self, cart_id: CartId) -> Result<CartHeader, RepositoryError> {
        self.staged()?
            .carts
            .get(&cart_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_line(
        &mut self,
        cart_id: CartId,
        product_id: ProductId,
    ) -> Result<Option<LineItem>, RepositoryError> {
        Ok(self.staged()?.line(cart_id, product_id))
    }

    async fn upsert_line(
        &mut self,
        cart_id: CartId,
        product_id: ProductId,
        delta: i32,
    ) -> Result<LineItem, RepositoryError> {
        let state = self.staged()?;
        *state.lines.entry((cart_id, product_id)).or_insert(0) += delta;
        state.touch(cart_id);
        state
            .line(cart_id, product_id)
            .ok_or(RepositoryError::DatabaseError)
    }

    async fn decrement_line(
        &mut self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<LineItem, RepositoryError> {
        let state = self.staged()?;
        let current = state
            .lines
            .get_mut(&(cart_id, product_id))
            .ok_or(RepositoryError::NotFound)?;
        *current -= quantity;
        state.touch(cart_id);
        state
            .line(cart_id, product_id)
            .ok_or(RepositoryError::DatabaseError)
    }

    async fn delete_line(
        &mut self,
        cart_id: CartId,
        product_id: ProductId,
    ) -> Result<Option<LineItem>, RepositoryError> {
        let state = self.staged()?;
        let removed = state
            .lines
            .remove(&(cart_id, product_id))
            .map(|quantity| LineItem {
                cart_id,
                product_id,
                quantity,
            });
        if removed.is_some() {
            state.touch(cart_id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl CartUnitOfWork for InMemoryUnitOfWork {
    async fn commit(&mut self) -> Result<(), RepositoryError> {
        let staged = self.staged.take().ok_or(RepositoryError::DatabaseError)?;
        *self.guard = staged;
        Ok(())
    }
}
