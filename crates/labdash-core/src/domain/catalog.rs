//! Externally supplied enumerations for class configuration.
//!
//! Templates, datastores and adapter types come from the ESXi host (or
//! canned values in mock mode). The registry treats the corresponding
//! class fields as opaque strings; this catalog only lets adapters warn
//! about selections that are not offered.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::class::ClassFields;
use super::vm::{PowerState, VmInfo};

/// Network adapter types offered when nothing else is configured.
pub const DEFAULT_NETWORK_ADAPTERS: [&str; 3] = ["Instructor", "NAT", "Inside"];

/// Available VM templates, datastores, adapter types and known VMs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabCatalog {
    pub templates: Vec<String>,
    pub datastores: Vec<String>,
    pub network_adapters: Vec<String>,
    pub vms: Vec<VmInfo>,
}

impl Default for LabCatalog {
    fn default() -> Self {
        Self {
            templates: Vec::new(),
            datastores: Vec::new(),
            network_adapters: DEFAULT_NETWORK_ADAPTERS.iter().map(|s| (*s).to_string()).collect(),
            vms: Vec::new(),
        }
    }
}

impl LabCatalog {
    /// Canned catalog used in mock mode.
    pub fn mock() -> Self {
        Self {
            templates: vec!["UbuntuTemplate".to_string(), "WinTemplate".to_string()],
            datastores: vec!["Datastore1".to_string(), "Datastore2".to_string()],
            network_adapters: vec![
                "NAT".to_string(),
                "Instructor".to_string(),
                "Inside".to_string(),
            ],
            vms: vec![
                VmInfo::new("VM1", PowerState::PoweredOff),
                VmInfo::new("VM2", PowerState::PoweredOn),
            ],
        }
    }

    /// Replace the templates with the non-blank lines of a listing.
    pub fn set_templates_from_listing(&mut self, listing: &str) {
        self.templates = listing
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
    }

    /// Selections in `fields` that this catalog does not offer.
    ///
    /// Empty selections and empty enumerations are never reported.
    pub fn unknown_selections(&self, fields: &ClassFields) -> Vec<SelectionWarning> {
        let mut warnings = Vec::new();

        if !fields.template.is_empty()
            && !self.templates.is_empty()
            && !self.templates.contains(&fields.template)
        {
            warnings.push(SelectionWarning::Template(fields.template.clone()));
        }
        if !fields.datastore.is_empty()
            && !self.datastores.is_empty()
            && !self.datastores.contains(&fields.datastore)
        {
            warnings.push(SelectionWarning::Datastore(fields.datastore.clone()));
        }
        if !self.network_adapters.is_empty() {
            for adapter in &fields.network_adapters {
                if !self.network_adapters.contains(adapter) {
                    warnings.push(SelectionWarning::Adapter(adapter.clone()));
                }
            }
        }

        warnings
    }
}

/// A class field value that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionWarning {
    Template(String),
    Datastore(String),
    Adapter(String),
}

impl fmt::Display for SelectionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(v) => write!(f, "unknown VM template '{v}'"),
            Self::Datastore(v) => write!(f, "unknown datastore '{v}'"),
            Self::Adapter(v) => write!(f, "unknown network adapter '{v}'"),
        }
    }
}
