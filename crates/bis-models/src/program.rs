//! Programs
//!
//! A program is the thematic classification of an event. The same six codes
//! are used as request tokens (`program_array`) and in API responses, where
//! they come paired with a human-readable name.

use bis_core::{BisError, BisResult};
use serde::{Deserialize, Serialize};

closed_token_set! {
    /// Program identifier code
    pub enum ProgramCode ("program") {
        /// Nature protection
        Nature => "ap",
        /// Historical sights
        Sights => "pamatky",
        Brdo => "brdo",
        Ekostan => "ekostan",
        Psb => "psb",
        Education => "vzdelavani",
    }
}

/// Program value returned by the API
///
/// The slug is checked against the closed set of program codes when the
/// value is constructed or deserialized. The name is free-form.
///
/// ```
/// use bis_models::Program;
///
/// let program = Program::new("ap", "Akce příroda").unwrap();
/// assert!(program.is_nature());
/// assert!(!program.is_sights());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProgramRecord", into = "ProgramRecord")]
pub struct Program {
    code: ProgramCode,
    name: String,
}

/// Wire shape of a program value
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProgramRecord {
    slug: String,
    name: String,
}

impl Program {
    pub fn new(slug: &str, name: impl Into<String>) -> BisResult<Self> {
        let code = slug.parse::<ProgramCode>().map_err(|_| {
            tracing::warn!(slug, "Rejected unknown program slug");
            BisError::invalid_argument(format!(
                "Value `{}` is not of valid types for `slug` parameter.",
                slug
            ))
        })?;

        let name = name.into();
        tracing::debug!(slug, name = %name, "Constructed program");
        Ok(Self { code, name })
    }

    pub fn slug(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> ProgramCode {
        self.code
    }

    pub fn is_nature(&self) -> bool {
        self.code == ProgramCode::Nature
    }

    pub fn is_sights(&self) -> bool {
        self.code == ProgramCode::Sights
    }
}

impl TryFrom<ProgramRecord> for Program {
    type Error = BisError;

    fn try_from(record: ProgramRecord) -> Result<Self, Self::Error> {
        Program::new(&record.slug, record.name)
    }
}

impl From<Program> for ProgramRecord {
    fn from(program: Program) -> Self {
        ProgramRecord {
            slug: program.slug().to_string(),
            name: program.name,
        }
    }
}
