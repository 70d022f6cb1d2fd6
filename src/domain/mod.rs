// Domain layer - Dashboard definition and publish outcomes
pub mod dashboard;
pub mod errors;
pub mod publish_result;
