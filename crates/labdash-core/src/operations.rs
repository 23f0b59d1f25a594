//! Lab automation operations and the scripts that implement them.
//!
//! [`ClassOperation`] acts on a single class (its name, template,
//! datastore and adapters become script parameters). [`LabTask`] covers
//! host-wide tasks that take no parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::ClassRecord;
use crate::ports::{CoreError, ScriptInvocation};

/// Script that provisions and tears down per-student folders and VMs.
pub const STUDENT_FOLDERS_SCRIPT: &str = "createStudentFolders.ps1";

/// Module with per-class VM power and removal functions.
pub const VM_FUNCTIONS_SCRIPT: &str = "VmFunctions.psm1";

/// An operation on one class's resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassOperation {
    /// Create folders and VMs for every student.
    BuildAllResources,
    /// Create folders and VMs for one student.
    BuildSingleResource { student: String },
    /// Delete every student folder and VM of the class.
    DeleteAllResources,
    /// Restart all powered-on VMs of the class.
    RestartAllVms,
    /// Remove the named VM from every student.
    RemoveVm { vm: String },
    /// Power on the named VM for every student.
    PowerOnVm { vm: String },
    /// Power off the named VM for every student.
    PowerOffVm { vm: String },
}

impl ClassOperation {
    /// Human-readable title, used as the heading of the result display.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::BuildAllResources => "Build All Resources",
            Self::BuildSingleResource { .. } => "Build Single Resource",
            Self::DeleteAllResources => "Delete All Resources",
            Self::RestartAllVms => "Restart All VMs",
            Self::RemoveVm { .. } => "Remove Specific VM",
            Self::PowerOnVm { .. } => "Power On Specific VM",
            Self::PowerOffVm { .. } => "Power Off Specific VM",
        }
    }

    /// Build the script invocation for `class`.
    ///
    /// Fails with `CoreError::Validation` when a required student or VM
    /// name is blank.
    pub fn invocation(&self, class: &ClassRecord) -> Result<ScriptInvocation, CoreError> {
        let invocation = match self {
            Self::BuildAllResources => provisioning(class, None),
            Self::BuildSingleResource { student } => {
                let student = required(student, "Please enter a specific student username.")?;
                provisioning(class, Some(student))
            }
            Self::DeleteAllResources => ScriptInvocation::new(STUDENT_FOLDERS_SCRIPT)
                .arg("ClassName", &class.name)
                .switch("DeleteAll", true),
            Self::RestartAllVms => ScriptInvocation::new(VM_FUNCTIONS_SCRIPT)
                .arg("ClassName", &class.name)
                .switch("RestartAll", true),
            Self::RemoveVm { vm } => {
                vm_action(class, "RemoveVM", required(vm, "Enter a target VM name to remove.")?)
            }
            Self::PowerOnVm { vm } => vm_action(
                class,
                "PowerOnVM",
                required(vm, "Enter a target VM name to power on.")?,
            ),
            Self::PowerOffVm { vm } => vm_action(
                class,
                "PowerOffVM",
                required(vm, "Enter a target VM name to power off.")?,
            ),
        };
        Ok(invocation)
    }
}

impl fmt::Display for ClassOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

fn required<'a>(value: &'a str, message: &str) -> Result<&'a str, CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CoreError::Validation(message.to_string()));
    }
    Ok(value)
}

fn provisioning(class: &ClassRecord, student: Option<&str>) -> ScriptInvocation {
    let mut invocation = ScriptInvocation::new(STUDENT_FOLDERS_SCRIPT).arg("ClassName", &class.name);
    if let Some(student) = student {
        invocation = invocation.arg("SingleStudent", student);
    }
    invocation
        .arg("VMTemplate", &class.template)
        .arg("Datastore", &class.datastore)
        .list("AdapterTypes", class.network_adapters.iter().cloned())
}

fn vm_action(class: &ClassRecord, action: &str, vm: &str) -> ScriptInvocation {
    ScriptInvocation::new(VM_FUNCTIONS_SCRIPT)
        .arg("ClassName", &class.name)
        .arg(action, vm)
}

/// A host-wide task with no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabTask {
    PowerOnAllVms,
    PowerOffAllVms,
    RestartAllVms,
    ListTemplates,
    ListStudentFolders,
    ShowPoweredOnVms,
}

impl LabTask {
    pub const ALL: [Self; 6] = [
        Self::PowerOnAllVms,
        Self::PowerOffAllVms,
        Self::RestartAllVms,
        Self::ListTemplates,
        Self::ListStudentFolders,
        Self::ShowPoweredOnVms,
    ];

    pub const fn script(self) -> &'static str {
        match self {
            Self::PowerOnAllVms => "PowerOnAllVMs.ps1",
            Self::PowerOffAllVms => "PowerOffAllVMs.ps1",
            Self::RestartAllVms => "RestartAllVMs.ps1",
            Self::ListTemplates => "ListTemplates.ps1",
            Self::ListStudentFolders => "ListStudentFolders.ps1",
            Self::ShowPoweredOnVms => "ShowAllPoweredOnVMs.ps1",
        }
    }

    pub fn invocation(self) -> ScriptInvocation {
        ScriptInvocation::new(self.script())
    }
}
