use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltInCategory {
    Sponsored,
    Amateur,
    Miniramp,
    Girls,
}

impl BuiltInCategory {
    pub const ALL: [BuiltInCategory; 4] = [
        BuiltInCategory::Sponsored,
        BuiltInCategory::Amateur,
        BuiltInCategory::Miniramp,
        BuiltInCategory::Girls,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltInCategory::Sponsored => "A-SPONSORED",
            BuiltInCategory::Amateur => "B-AMATEUR",
            BuiltInCategory::Miniramp => "MINIRAMP",
            BuiltInCategory::Girls => "GIRLS",
        }
    }
}

/// A contest category. The four built-in categories are always
/// recognized by name; administrators may add custom ones at runtime.
///
/// Identity is the tag string, so `Category::from_str("GIRLS")` and
/// `Category::BuiltIn(BuiltInCategory::Girls)` are the same category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    BuiltIn(BuiltInCategory),
    Custom(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CategoryParseError {
    #[error("Category tag must not be empty")]
    EmptyTag,
}

impl Category {
    pub fn sponsored() -> Self {
        Category::BuiltIn(BuiltInCategory::Sponsored)
    }

    pub fn amateur() -> Self {
        Category::BuiltIn(BuiltInCategory::Amateur)
    }

    pub fn miniramp() -> Self {
        Category::BuiltIn(BuiltInCategory::Miniramp)
    }

    pub fn girls() -> Self {
        Category::BuiltIn(BuiltInCategory::Girls)
    }

    pub fn built_ins() -> Vec<Category> {
        BuiltInCategory::ALL.iter().map(|c| Category::BuiltIn(*c)).collect()
    }

    pub fn tag(&self) -> &str {
        match self {
            Category::BuiltIn(c) => c.as_str(),
            Category::Custom(tag) => tag.as_str(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::BuiltIn(BuiltInCategory::Sponsored) => "A - Sponsored Rider",
            Category::BuiltIn(BuiltInCategory::Amateur) => "B - Amateur Rider",
            other => other.tag(),
        }
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.is_empty() {
            return Err(CategoryParseError::EmptyTag);
        }

        Ok(
            BuiltInCategory::ALL
                .iter()
                .find(|c| c.as_str() == tag)
                .map(|c| Category::BuiltIn(*c))
                .unwrap_or_else(|| Category::Custom(tag.to_string())),
        )
    }
}

impl TryFrom<String> for Category {
    type Error = CategoryParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.tag().to_string()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
