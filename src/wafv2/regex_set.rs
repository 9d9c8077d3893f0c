use super::Scope;
use crate::error::StackError;
use crate::template::Tag;
use regex::Regex;
use serde::Serialize;

/// AWS quota on expressions per pattern set.
pub const MAX_PATTERNS: usize = 10;

/// A named list of regular expressions (`AWS::WAFv2::RegexPatternSet`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegexPatternSet {
    pub regular_expression_list: Vec<String>,
    pub scope: Scope,
    pub description: String,
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl RegexPatternSet {
    pub fn new(name: impl Into<String>, patterns: Vec<String>, scope: Scope) -> Self {
        Self {
            regular_expression_list: patterns,
            scope,
            description: String::new(),
            name: name.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag::new(key, value));
        self
    }

    pub fn compile(&self) -> Result<Vec<Regex>, StackError> {
        if self.regular_expression_list.len() > MAX_PATTERNS {
            return Err(StackError::TooManyPatterns {
                set: self.name.clone(),
                count: self.regular_expression_list.len(),
                limit: MAX_PATTERNS,
            });
        }

        self.regular_expression_list
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| StackError::InvalidPattern {
                    set: self.name.clone(),
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}
