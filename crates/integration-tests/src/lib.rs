//! Integration tests for Cartwheel.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply migrations
//! sqlx migrate run --source crates/api/migrations
//!
//! # Start the API server
//! cargo run -p cartwheel-api
//!
//! # Run integration tests
//! cargo test -p cartwheel-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `auth_flow` - Registration, login, refresh and logout
//! - `cart_flow` - Cart lifecycle and ownership scoping
