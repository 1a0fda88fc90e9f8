//! HR Engine
//!
//! This crate provides the attendance and payroll computation core of an HR
//! management system: attendance-status derivation from clock-in/clock-out
//! entries, period salary records, leave balances, and birthday/anniversary
//! projection. An axum API in [`api`] exposes the same operations over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
