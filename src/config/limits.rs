use crate::domain::model::RosterLimits;
use crate::utils::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;

/// Capacity limits as they appear in an on-disk TOML file. Every field
/// is optional; anything absent falls back to the value it is applied
/// over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitsFile {
    pub max_courses: Option<usize>,
    pub max_students_per_course: Option<usize>,
    pub max_field_len: Option<usize>,
}

impl LimitsFile {
    pub fn load(path: &str) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| RosterError::ConfigError {
            message: format!("Could not read limits file {}: {}", path, e),
        })?;
        Ok(toml::from_str(&text)?)
    }

    pub fn apply(&self, base: RosterLimits) -> RosterLimits {
        RosterLimits {
            max_courses: self.max_courses.unwrap_or(base.max_courses),
            max_students_per_course: self
                .max_students_per_course
                .unwrap_or(base.max_students_per_course),
            max_field_len: self.max_field_len.unwrap_or(base.max_field_len),
        }
    }
}
