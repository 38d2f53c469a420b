// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod endpoint_pool;
pub mod http_response;
pub mod inference_client;
