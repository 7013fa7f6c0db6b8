pub mod contact_handler;
pub mod docs_handler;
pub mod faker_generator;
pub mod health_handler;
pub mod metrics_handler;
pub mod pool_generator;
pub mod rate_limit;
pub mod ui_handler;
