// Application layer - Use cases
pub mod dashboard_catalog;
pub mod dashboard_gateway;
pub mod publisher;
