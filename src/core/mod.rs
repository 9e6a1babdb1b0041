pub mod engine;
pub mod parser;
pub mod report;

pub use crate::domain::model::{
    Course, Diagnostic, DiagnosticKind, Entry, ParseOutcome, Roster, RosterLimits, StudentReport,
};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
