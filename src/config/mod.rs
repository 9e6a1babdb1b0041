pub mod cli;
pub mod limits;

use crate::core::ConfigProvider;
use crate::domain::model::RosterLimits;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use clap::Parser;
use limits::LimitsFile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "gradebook")]
#[command(about = "Parses a course roster file and reports student grades")]
pub struct CliConfig {
    /// Roster file to load; prompted for interactively when omitted
    #[arg(long)]
    pub input: Option<String>,

    /// Optional TOML file overriding the default capacity limits
    #[arg(long)]
    pub limits: Option<String>,

    #[arg(long)]
    pub max_courses: Option<usize>,

    #[arg(long)]
    pub max_students: Option<usize>,

    #[arg(long)]
    pub max_field_len: Option<usize>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges defaults, the optional TOML limits file, and explicit
    /// flags (highest precedence) into a validated runtime config.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut limits = RosterLimits::default();
        if let Some(path) = &self.limits {
            limits = LimitsFile::load(path)?.apply(limits);
        }
        if let Some(n) = self.max_courses {
            limits.max_courses = n;
        }
        if let Some(n) = self.max_students {
            limits.max_students_per_course = n;
        }
        if let Some(n) = self.max_field_len {
            limits.max_field_len = n;
        }

        let config = AppConfig {
            input: self.input.clone(),
            limits,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Fully resolved configuration handed to the engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: Option<String>,
    pub limits: RosterLimits,
}

impl ConfigProvider for AppConfig {
    fn limits(&self) -> RosterLimits {
        self.limits
    }

    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }
        validate_positive_number("max_courses", self.limits.max_courses, 1)?;
        validate_positive_number(
            "max_students",
            self.limits.max_students_per_course,
            1,
        )?;
        validate_positive_number("max_field_len", self.limits.max_field_len, 1)?;
        Ok(())
    }
}
