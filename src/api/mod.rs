mod handlers;
mod routes;

pub use handlers::{AppState, ErrorResponse, SuccessResponse};
pub use routes::create_api_router;
