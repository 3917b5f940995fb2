use std::fmt;

use serde::Serialize;

/// Caller whose bearer token was verified by the identity service
///
/// Carries only the subject identifier. It is used for logging and audit;
/// any verified caller may synthesize speech in any supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Caller {
    /// Subject identifier issued by the identity service
    pub id: String,
}

impl Caller {
    /// Create a caller from a subject identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
