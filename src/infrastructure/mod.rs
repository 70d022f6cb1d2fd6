// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod graphql;
pub mod nerdgraph_client;
pub mod nerdgraph_mapper;
pub mod summary_file;
pub mod telemetry;
