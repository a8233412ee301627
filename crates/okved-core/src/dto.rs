use crate::domain::{CanonicalPhone, MatchResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReportDto {
    pub phone: CanonicalPhone,
    pub code: String,
    pub name: String,
    pub match_length: usize,
    pub fallback: bool,
}

impl MatchReportDto {
    pub fn new(phone: &CanonicalPhone, result: &MatchResult) -> Self {
        Self {
            phone: phone.clone(),
            code: result.entry.code.clone(),
            name: result.entry.name.clone(),
            match_length: result.match_length,
            fallback: result.is_fallback(),
        }
    }
}
