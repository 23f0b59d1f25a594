//! Main commands enum and shared argument groups.

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use labdash_core::{ClassOperation, LabTask};

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all classes
    List {
        /// Print the class list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one class in detail
    Show {
        /// Class name
        name: String,
        /// Print the class as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new class
    Add {
        #[command(flatten)]
        fields: ClassArgs,
    },

    /// Edit a class; fields not given keep their current values
    Update {
        /// Current name of the class to edit
        original_name: String,
        #[command(flatten)]
        fields: ClassArgs,
    },

    /// Delete a class
    Delete {
        /// Class name
        name: String,
    },

    /// Run an operation against one class's resources
    Run {
        /// Class name
        class: String,
        /// Operation to run
        #[arg(value_enum)]
        operation: OperationKind,
        /// Student username (build-single)
        #[arg(long)]
        student: Option<String>,
        /// Target VM name (remove-vm, power-on-vm, power-off-vm)
        #[arg(long)]
        vm: Option<String>,
    },

    /// Run a host-wide task
    Task {
        #[arg(value_enum)]
        task: TaskKind,
    },

    /// Show available templates, datastores, adapters and VMs
    Catalog {
        /// Reload templates from the host first (production mode)
        #[arg(long)]
        refresh: bool,
    },

    /// Show resolved settings and paths
    Paths,
}

/// Class fields as collected from flags.
///
/// Every field is optional so `update` can overwrite only what was given.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassArgs {
    /// Class name
    #[arg(long)]
    pub name: Option<String>,

    /// Quarter, e.g. "Fall 2024"
    #[arg(long)]
    pub quarter: Option<String>,

    /// Course code
    #[arg(long)]
    pub course: Option<String>,

    /// Student username (repeatable)
    #[arg(long = "student")]
    pub students: Vec<String>,

    /// File with one student username per line
    #[arg(long = "students-file")]
    pub students_file: Option<PathBuf>,

    /// VM template
    #[arg(long)]
    pub template: Option<String>,

    /// Datastore
    #[arg(long)]
    pub datastore: Option<String>,

    /// Network adapter type (repeatable)
    #[arg(long = "adapter")]
    pub adapters: Vec<String>,
}

/// Per-class operations selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    BuildAll,
    BuildSingle,
    DeleteAll,
    RestartAll,
    RemoveVm,
    PowerOnVm,
    PowerOffVm,
}

impl OperationKind {
    /// Combine with the optional parameters into a core operation.
    ///
    /// Missing parameters become empty strings; the core rejects them.
    pub fn into_operation(self, student: Option<String>, vm: Option<String>) -> ClassOperation {
        let student = student.unwrap_or_default();
        let vm = vm.unwrap_or_default();
        match self {
            Self::BuildAll => ClassOperation::BuildAllResources,
            Self::BuildSingle => ClassOperation::BuildSingleResource { student },
            Self::DeleteAll => ClassOperation::DeleteAllResources,
            Self::RestartAll => ClassOperation::RestartAllVms,
            Self::RemoveVm => ClassOperation::RemoveVm { vm },
            Self::PowerOnVm => ClassOperation::PowerOnVm { vm },
            Self::PowerOffVm => ClassOperation::PowerOffVm { vm },
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    PowerOnAll,
    PowerOffAll,
    RestartAll,
    ListTemplates,
    ListStudentFolders,
    ShowPoweredOn,
}

impl From<TaskKind> for LabTask {
    fn from(kind: TaskKind) -> Self {
        match kind {
            TaskKind::PowerOnAll => Self::PowerOnAllVms,
            TaskKind::PowerOffAll => Self::PowerOffAllVms,
            TaskKind::RestartAll => Self::RestartAllVms,
            TaskKind::ListTemplates => Self::ListTemplates,
            TaskKind::ListStudentFolders => Self::ListStudentFolders,
            TaskKind::ShowPoweredOn => Self::ShowPoweredOnVms,
        }
    }
}
