use serde::{Deserialize, Serialize};

/// Fields collected so far. Each one is written by exactly one intake state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Raw text as given, e.g. "3" or "about five".
    pub experience_years: Option<String>,
    pub desired_position: Option<String>,
    pub location: Option<String>,
    pub tech_stack: Option<Vec<String>>,
}

/// A fully collected candidate, produced from a `CandidateProfile` once every field is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub experience_years: String,
    pub desired_position: String,
    pub location: String,
    pub tech_stack: Vec<String>,
}

impl CandidateProfile {
    /// Finalizes the profile. Returns `None` while any field is still missing.
    pub fn build(&self) -> Option<CandidateRecord> {
        Some(CandidateRecord {
            full_name: self.full_name.clone()?,
            email: self.email.clone()?,
            phone: self.phone.clone()?,
            experience_years: self.experience_years.clone()?,
            desired_position: self.desired_position.clone()?,
            location: self.location.clone()?,
            tech_stack: self.tech_stack.clone()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Parses a comma-separated skill list.
///
/// Segments are trimmed; empty segments and exact repeats are dropped. Order and
/// case are preserved, so "React" and "react" are both kept.
pub fn parse_tech_stack(input: &str) -> Vec<String> {
    let mut stack: Vec<String> = Vec::new();
    for segment in input.split(',').map(str::trim) {
        if segment.is_empty() || stack.iter().any(|s| s == segment) {
            continue;
        }
        stack.push(segment.to_string());
    }
    stack
}
