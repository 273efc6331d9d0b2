//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! # Auth
//! POST /auth/register          - Register (sets refresh cookie)
//! POST /auth/login             - Login (sets refresh cookie)
//! POST /auth/refresh           - Exchange refresh cookie for access token
//! POST /auth/logout            - Clear refresh cookie
//!
//! # Posts
//! GET    /posts                - List posts
//! POST   /posts                - Create post
//! DELETE /posts/{id}           - Delete post (bearer)
//!
//! # Products
//! GET    /products             - List products
//! POST   /products             - Create product
//! DELETE /products/{id}        - Delete product (bearer)
//!
//! # Cart (all bearer)
//! GET    /cart                 - Show cart (auto-creates)
//! DELETE /cart                 - Empty cart
//! POST   /cart/items           - Add item (aggregates quantity)
//! PATCH  /cart/items/{id}      - Update item quantity
//! DELETE /cart/items/{id}      - Remove item
//! ```

pub mod auth;
pub mod cart;
pub mod posts;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
}

/// Create the post routes router.
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::index).post(posts::create))
        .route("/{id}", delete(posts::remove))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/{id}", delete(products::remove))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show).delete(cart::clear))
        .route("/items", post(cart::add_item))
        .route(
            "/items/{id}",
            patch(cart::update_item).delete(cart::remove_item),
        )
}

/// Assemble all API routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/posts", post_routes())
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
}
