// src/api/mod.rs
pub mod handlers;
pub mod response;

pub use handlers::{create_api_router, AppState, ParseStats, TreeResponse};
pub use response::{api_error, api_success, ApiResponse, ApiResult, ParseFailure};
