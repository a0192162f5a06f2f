//! REST API implementation
//!
//! - types: shared state and the response envelope
//! - extractors: validated JSON body and path id extractors
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration
//! - tests: router-level tests

mod extractors;
mod handlers;
mod router;
pub mod types;

// Re-export public API
pub use extractors::{RawId, ValidJson};
pub use router::create_router;
pub use types::{ApiResponse, AppState, HealthResponse};
