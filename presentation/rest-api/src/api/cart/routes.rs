use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::errors::CartError;
use business::domain::cart::model::CartRef;
use business::domain::cart::use_cases::apply_delta::{ApplyCartDeltaParams, ApplyCartDeltaUseCase};
use business::domain::cart::use_cases::create::{CreateCartParams, CreateCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::get_id::{GetCartIdParams, GetCartIdUseCase};
use business::domain::cart::use_cases::get_items::{GetCartItemsParams, GetCartItemsUseCase};
use business::domain::cart::use_cases::update::{UpdateCartParams, UpdateCartUseCase};
use business::domain::shared::value_objects::OwnerPhone;

use crate::api::cart::dto::{
    CartChangeResponse, CartIdResponse, CartItemRequest, CartItemResponse, CartResponse,
    CreateCartRequest, CreateCartResponse, UpdateCartRequest, UpdateCartResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    get_id_use_case: Arc<dyn GetCartIdUseCase>,
    get_use_case: Arc<dyn GetCartUseCase>,
    get_items_use_case: Arc<dyn GetCartItemsUseCase>,
    update_use_case: Arc<dyn UpdateCartUseCase>,
    apply_delta_use_case: Arc<dyn ApplyCartDeltaUseCase>,
}

impl CartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        get_id_use_case: Arc<dyn GetCartIdUseCase>,
        get_use_case: Arc<dyn GetCartUseCase>,
        get_items_use_case: Arc<dyn GetCartItemsUseCase>,
        update_use_case: Arc<dyn UpdateCartUseCase>,
        apply_delta_use_case: Arc<dyn ApplyCartDeltaUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_id_use_case,
            get_use_case,
            get_items_use_case,
            update_use_case,
            apply_delta_use_case,
        }
    }
}

/// Cart API
///
/// Every mutation reserves or releases product stock in the same
/// transaction as the cart line change. Quantities must be lots of
/// 50, 100 or 200 units.
///
/// Path segments after `/carts/` are named `cart` throughout: it is the
/// owner's phone number on `/carts/:cart/id` and the numeric cart id
/// everywhere else.
#[OpenApi]
impl CartApi {
    /// Create a cart
    ///
    /// Creates the owner's cart and adds the initial items. An owner can
    /// hold a single cart.
    #[oai(path = "/carts", method = "post", tag = "ApiTags::Carts")]
    async fn create_cart(&self, body: Json<CreateCartRequest>) -> CreateCartApiResponse {
        let result = match OwnerPhone::parse(&body.0.phone_number) {
            Ok(owner) => {
                let params = CreateCartParams {
                    owner,
                    items: body.0.items.iter().map(|i| i.into()).collect(),
                };
                self.create_use_case.execute(params).await
            }
            Err(err) => Err(CartError::from(err)),
        };

        match result {
            Ok(cart_id) => CreateCartApiResponse::Created(Json(CreateCartResponse {
                message: "Cart created".to_string(),
                cart_id,
            })),
            Err(err) => CreateCartApiResponse::from_error(err),
        }
    }

    /// Get the cart id of an owner
    #[oai(path = "/carts/:cart/id", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart_id(&self, cart: Path<String>) -> CartIdApiResponse {
        let result = match OwnerPhone::parse(&cart.0) {
            Ok(owner) => {
                self.get_id_use_case
                    .execute(GetCartIdParams { owner })
                    .await
            }
            Err(err) => Err(CartError::from(err)),
        };

        match result {
            Ok(cart_id) => CartIdApiResponse::Ok(Json(CartIdResponse { cart_id })),
            Err(err) => CartIdApiResponse::from_error(err),
        }
    }

    /// Get a cart with priced items and total
    #[oai(path = "/carts/:cart", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart(&self, cart: Path<i64>) -> CartApiResponse {
        match self
            .get_use_case
            .execute(GetCartParams {
                cart: CartRef::Id(cart.0),
            })
            .await
        {
            Ok(cart) => CartApiResponse::Ok(Json(cart.into())),
            Err(err) => CartApiResponse::from_error(err),
        }
    }

    /// List the items of a cart
    #[oai(path = "/carts/:cart/items", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart_items(&self, cart: Path<i64>) -> CartItemsApiResponse {
        match self
            .get_items_use_case
            .execute(GetCartItemsParams { cart_id: cart.0 })
            .await
        {
            Ok(items) => {
                let responses: Vec<CartItemResponse> =
                    items.into_iter().map(|i| i.into()).collect();
                CartItemsApiResponse::Ok(Json(responses))
            }
            Err(err) => CartItemsApiResponse::from_error(err),
        }
    }

    /// Update a cart
    ///
    /// Applies each signed quantity in order: positive adds, negative
    /// removes, zero drops the line. Stops at the first failing item;
    /// items before it stay applied.
    #[oai(path = "/carts/:cart", method = "patch", tag = "ApiTags::Carts")]
    async fn update_cart(
        &self,
        cart: Path<i64>,
        body: Json<UpdateCartRequest>,
    ) -> UpdateCartApiResponse {
        let result = match OwnerPhone::parse(&body.0.phone_number) {
            Ok(owner) => {
                let params = UpdateCartParams {
                    cart_id: cart.0,
                    owner,
                    items: body.0.items.iter().map(|i| i.into()).collect(),
                };
                self.update_use_case.execute(params).await
            }
            Err(err) => Err(CartError::from(err)),
        };

        match result {
            Ok(changes) => UpdateCartApiResponse::Ok(Json(UpdateCartResponse::updated(changes))),
            Err(err) => UpdateCartApiResponse::from_error(err),
        }
    }

    /// Apply a single quantity change to a cart
    #[oai(path = "/carts/:cart/items", method = "post", tag = "ApiTags::Carts")]
    async fn apply_cart_delta(
        &self,
        cart: Path<i64>,
        body: Json<CartItemRequest>,
    ) -> CartChangeApiResponse {
        let params = ApplyCartDeltaParams {
            cart: CartRef::Id(cart.0),
            product_id: body.0.product_id,
            quantity: body.0.qty,
        };

        match self.apply_delta_use_case.execute(params).await {
            Ok(change) => CartChangeApiResponse::Ok(Json(change.into())),
            Err(err) => CartChangeApiResponse::from_error(err),
        }
    }
}

/// Routes a mapped `CartError` to the matching response variant.
macro_rules! impl_from_cart_error {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $name {
                fn from_error(err: CartError) -> Self {
                    let (status, json) = err.into_error_response();
                    match status.as_u16() {
                        400 => Self::BadRequest(json),
                        404 => Self::NotFound(json),
                        409 => Self::Conflict(json),
                        503 => Self::Unavailable(json),
                        _ => Self::InternalError(json),
                    }
                }
            }
        )+
    };
}

impl_from_cart_error!(
    CreateCartApiResponse,
    CartIdApiResponse,
    CartApiResponse,
    CartItemsApiResponse,
    UpdateCartApiResponse,
    CartChangeApiResponse,
);

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartApiResponse {
    #[oai(status = 201)]
    Created(Json<CreateCartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartIdApiResponse {
    #[oai(status = 200)]
    Ok(Json<CartIdResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartApiResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartItemsApiResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCartApiResponse {
    #[oai(status = 200)]
    Ok(Json<UpdateCartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartChangeApiResponse {
    #[oai(status = 200)]
    Ok(Json<CartChangeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}
