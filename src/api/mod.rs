//! HTTP API module for the Rental Pricing Engine.
//!
//! This module provides the REST API endpoint for quoting rental costs
//! from the asset catalog or from inline rate plans.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::QuoteRequest;
pub use response::{ApiError, QuoteResponse};
pub use state::AppState;
