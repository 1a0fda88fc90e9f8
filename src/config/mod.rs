//! Configuration loading and management for the HR Engine.
//!
//! This module loads organisation policy from YAML files: organisation
//! settings, shift definitions and annual leave allotments.
//!
//! # Example
//!
//! ```no_run
//! use hr_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy for: {}", config.organization().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LeaveAllotment, OrganizationConfig, PolicyConfig};
