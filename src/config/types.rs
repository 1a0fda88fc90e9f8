//! Configuration types for organisation policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::calculation::PayrollPolicy;
use crate::models::{LeaveType, ShiftConfig};

/// Organisation-wide settings from organization.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationConfig {
    /// The organisation's display name.
    pub name: String,
    /// Default ISO 4217 currency code for salary records.
    pub currency: String,
    /// Shift code used when a request names no shift.
    pub default_shift: String,
    /// Payroll policy settings.
    #[serde(default)]
    pub payroll: PayrollPolicy,
}

/// Shift definitions from shifts.yaml, keyed by shift code.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ShiftsConfig {
    pub shifts: HashMap<String, ShiftConfig>,
}

/// Leave allotments from leave.yaml.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LeaveConfig {
    pub leave_types: Vec<LeaveAllotment>,
}

/// Days granted per year for one leave type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveAllotment {
    /// The leave type this allotment covers.
    pub leave_type: LeaveType,
    /// Days granted per calendar year.
    pub annual_allotment: Decimal,
}

/// The complete organisation policy loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    organization: OrganizationConfig,
    shifts: HashMap<String, ShiftConfig>,
    leave_allotments: Vec<LeaveAllotment>,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig from its component parts.
    pub fn new(
        organization: OrganizationConfig,
        shifts: HashMap<String, ShiftConfig>,
        leave_allotments: Vec<LeaveAllotment>,
    ) -> Self {
        Self {
            organization,
            shifts,
            leave_allotments,
        }
    }

    /// Returns the organisation settings.
    pub fn organization(&self) -> &OrganizationConfig {
        &self.organization
    }

    /// Returns all shifts by code.
    pub fn shifts(&self) -> &HashMap<String, ShiftConfig> {
        &self.shifts
    }

    /// Returns the configured leave allotments in file order.
    pub fn leave_allotments(&self) -> &[LeaveAllotment] {
        &self.leave_allotments
    }
}
