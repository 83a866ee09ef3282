pub mod api;
pub mod config;
pub mod domain;
pub mod planner;
pub mod state;
pub mod telemetry;
pub mod utils;
