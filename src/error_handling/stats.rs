//! Run statistics tracking.
//!
//! Counts warnings and informational events during a run. The whole
//! pipeline is a single synchronous pass, so plain counters behind
//! `&mut` are sufficient.

use std::collections::HashMap;

use log::info;
use strum::IntoEnumIterator;

use super::types::{InfoType, WarningType};

/// Statistics accumulated over one inventory run.
///
/// All counter types are initialized to zero on creation, so lookups are
/// total over the enum.
#[derive(Debug)]
pub struct ScanStats {
    warnings: HashMap<WarningType, usize>,
    info: HashMap<InfoType, usize>,
}

impl ScanStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut warnings = HashMap::new();
        for warning in WarningType::iter() {
            warnings.insert(warning, 0);
        }

        let mut info = HashMap::new();
        for info_type in InfoType::iter() {
            info.insert(info_type, 0);
        }

        ScanStats { warnings, info }
    }

    /// Increment a warning counter.
    pub fn increment_warning(&mut self, warning: WarningType) {
        *self.warnings.entry(warning).or_insert(0) += 1;
    }

    /// Increment an info counter.
    pub fn increment_info(&mut self, info_type: InfoType) {
        *self.info.entry(info_type).or_insert(0) += 1;
    }

    /// Get the count for a warning type.
    pub fn warning_count(&self, warning: WarningType) -> usize {
        self.warnings.get(&warning).copied().unwrap_or(0)
    }

    /// Get the count for an info type.
    pub fn info_count(&self, info_type: InfoType) -> usize {
        self.info.get(&info_type).copied().unwrap_or(0)
    }

    /// Total warnings across all types.
    pub fn total_warnings(&self) -> usize {
        self.warnings.values().sum()
    }

    /// Total info events across all types.
    pub fn total_info(&self) -> usize {
        self.info.values().sum()
    }

    /// Logs nonzero counters, grouped by severity.
    pub fn log_summary(&self) {
        let total_warnings = self.total_warnings();
        if total_warnings > 0 {
            info!("Warning Counts ({} total):", total_warnings);
            for warning in WarningType::iter() {
                let count = self.warning_count(warning);
                if count > 0 {
                    info!("   {}: {}", warning.as_str(), count);
                }
            }
        }

        let total_info = self.total_info();
        if total_info > 0 {
            info!("Info Counts ({} total):", total_info);
            for info_type in InfoType::iter() {
                let count = self.info_count(info_type);
                if count > 0 {
                    info!("   {}: {}", info_type.as_str(), count);
                }
            }
        }
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}
