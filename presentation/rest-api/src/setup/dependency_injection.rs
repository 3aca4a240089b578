use std::sync::Arc;

use business::domain::cart::policy::CartPolicy;
use business::domain::cart::repository::CartRepository;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;
use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::cart::apply_delta::ApplyCartDeltaUseCaseImpl;
use business::application::cart::create::CreateCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::get_id::GetCartIdUseCaseImpl;
use business::application::cart::get_items::GetCartItemsUseCaseImpl;
use business::application::cart::update::UpdateCartUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;

use crate::api::cart::routes::CartApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub cart_api: CartApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, policy: CartPolicy) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = HealthApi::new(pool.clone());

        // Infrastructure adapters
        let product_repository: Arc<dyn ProductRepository> =
            Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let cart_repository: Arc<dyn CartRepository> =
            Arc::new(CartRepositoryPostgres::new(pool));

        // Product use cases
        let get_product_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let search_products_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Cart use cases
        let create_cart_use_case = Arc::new(CreateCartUseCaseImpl {
            repository: cart_repository.clone(),
            policy,
            logger: logger.clone(),
        });
        let get_cart_id_use_case = Arc::new(GetCartIdUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_cart_items_use_case = Arc::new(GetCartItemsUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let update_cart_use_case = Arc::new(UpdateCartUseCaseImpl {
            repository: cart_repository.clone(),
            policy,
            logger: logger.clone(),
        });
        let apply_delta_use_case = Arc::new(ApplyCartDeltaUseCaseImpl {
            repository: cart_repository,
            policy,
            logger,
        });

        let product_api = ProductApi::new(get_product_use_case, search_products_use_case);
        let cart_api = CartApi::new(
            create_cart_use_case,
            get_cart_id_use_case,
            get_cart_use_case,
            get_cart_items_use_case,
            update_cart_use_case,
            apply_delta_use_case,
        );

        Self {
            health_api,
            product_api,
            cart_api,
        }
    }
}
