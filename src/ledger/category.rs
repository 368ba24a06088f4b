use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Classifies a transaction into one of the five fixed labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Food,
    Utilities,
    Entertainment,
    Salary,
    Others,
}

impl Category {
    /// Canonical ordering used for deterministic breakdown and legend
    /// rendering.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Utilities,
        Category::Entertainment,
        Category::Salary,
        Category::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Salary => "Salary",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| ValidationError::UnknownCategory(value.to_string()))
    }
}
