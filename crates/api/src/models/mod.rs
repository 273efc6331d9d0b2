//! Domain types serialized to the JSON API surface.

pub mod cart;
pub mod post;
pub mod product;
pub mod user;

pub use cart::{Cart, CartItem, CartItemSummary};
pub use post::Post;
pub use product::Product;
pub use user::User;
