//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading organisation
//! policy from YAML files.

use std::fs;
use std::path::Path;

use crate::calculation::PayrollPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::ShiftConfig;

use super::types::{
    LeaveAllotment, LeaveConfig, OrganizationConfig, PolicyConfig, ShiftsConfig,
};

/// Loads and provides access to organisation policy.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query shifts, payroll policy and leave allotments.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── organization.yaml  # Name, currency, default shift, payroll policy
/// ├── shifts.yaml        # Shift definitions by code
/// └── leave.yaml         # Annual leave allotments
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
///
/// let shift = loader.get_shift("general").unwrap();
/// println!("General shift starts at {}", shift.standard_start);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A shift definition is unusable or the default shift is not defined
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let organization_path = path.join("organization.yaml");
        let organization = Self::load_yaml::<OrganizationConfig>(&organization_path)?;
        if organization.payroll.working_days_per_month == 0 {
            return Err(EngineError::ConfigParseError {
                path: organization_path.display().to_string(),
                message: "payroll.working_days_per_month must be greater than zero".to_string(),
            });
        }

        let shifts_path = path.join("shifts.yaml");
        let shifts = Self::load_yaml::<ShiftsConfig>(&shifts_path)?.shifts;
        for (code, shift) in &shifts {
            shift.validate().map_err(|e| EngineError::ConfigParseError {
                path: shifts_path.display().to_string(),
                message: format!("shift '{}': {}", code, e),
            })?;
        }
        if !shifts.contains_key(&organization.default_shift) {
            return Err(EngineError::ConfigParseError {
                path: organization_path.display().to_string(),
                message: format!(
                    "default_shift '{}' is not defined in shifts.yaml",
                    organization.default_shift
                ),
            });
        }

        let leave_path = path.join("leave.yaml");
        let leave = Self::load_yaml::<LeaveConfig>(&leave_path)?;

        tracing::debug!(
            path = %path.display(),
            shifts = shifts.len(),
            leave_types = leave.leave_types.len(),
            "Loaded organisation policy"
        );

        Ok(Self {
            config: PolicyConfig::new(organization, shifts, leave.leave_types),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the organisation settings.
    pub fn organization(&self) -> &OrganizationConfig {
        self.config.organization()
    }

    /// Gets a shift by its code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hr_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// let shift = loader.get_shift("night")?;
    /// assert!(shift.is_overnight());
    /// # Ok::<(), hr_engine::error::EngineError>(())
    /// ```
    pub fn get_shift(&self, code: &str) -> EngineResult<&ShiftConfig> {
        self.config
            .shifts()
            .get(code)
            .ok_or_else(|| EngineError::ShiftNotFound {
                code: code.to_string(),
            })
    }

    /// Returns the organisation's default shift.
    pub fn default_shift(&self) -> EngineResult<&ShiftConfig> {
        self.get_shift(&self.config.organization().default_shift)
    }

    /// Returns the payroll policy.
    pub fn payroll_policy(&self) -> &PayrollPolicy {
        &self.config.organization().payroll
    }

    /// Returns the annual leave allotments.
    pub fn leave_allotments(&self) -> &[LeaveAllotment] {
        self.config.leave_allotments()
    }
}
