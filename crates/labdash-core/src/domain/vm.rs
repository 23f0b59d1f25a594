//! Virtual machine summary types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Power state of a VM, using the PowerCLI spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PowerState {
    PoweredOn,
    #[default]
    PoweredOff,
    Suspended,
}

impl PowerState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PoweredOn => "PoweredOn",
            Self::PoweredOff => "PoweredOff",
            Self::Suspended => "Suspended",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "PoweredOn" => Ok(Self::PoweredOn),
            "PoweredOff" => Ok(Self::PoweredOff),
            "Suspended" => Ok(Self::Suspended),
            other => Err(format!("unknown power state: {other}")),
        }
    }
}

/// Name and power state of a single virtual machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmInfo {
    pub name: String,
    pub power_state: PowerState,
}

impl VmInfo {
    pub fn new(name: impl Into<String>, power_state: PowerState) -> Self {
        Self {
            name: name.into(),
            power_state,
        }
    }

    /// Flip between powered on and powered off.
    ///
    /// A suspended VM is resumed (treated as off, so it powers on).
    pub fn toggle(&mut self) {
        self.power_state = match self.power_state {
            PowerState::PoweredOn => PowerState::PoweredOff,
            PowerState::PoweredOff | PowerState::Suspended => PowerState::PoweredOn,
        };
    }

    pub const fn is_powered_on(&self) -> bool {
        matches!(self.power_state, PowerState::PoweredOn)
    }
}

impl fmt::Display for VmInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.power_state)
    }
}
