// User-chosen criteria that shape the view.
//
// Parsing follows the values the presentation layer sends: "All" or a category name,
// and "", "asc" or "desc" for the sort directive.

use crate::modules::events::core::event_record::{Category, UnknownCategory};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn accepts(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::Only(category) => category.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortDirective {
    #[default]
    None,
    PriceAscending,
    PriceDescending,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort directive: {0}")]
pub struct UnknownSortDirective(pub String);

impl FromStr for SortDirective {
    type Err = UnknownSortDirective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(SortDirective::None),
            "asc" => Ok(SortDirective::PriceAscending),
            "desc" => Ok(SortDirective::PriceDescending),
            other => Err(UnknownSortDirective(other.to_string())),
        }
    }
}

impl TryFrom<String> for SortDirective {
    type Error = UnknownSortDirective;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortDirective> for String {
    fn from(value: SortDirective) -> Self {
        match value {
            SortDirective::None => String::new(),
            SortDirective::PriceAscending => "asc".to_string(),
            SortDirective::PriceDescending => "desc".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub search: String,
    pub sort: SortDirective,
}

impl FilterCriteria {
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: SortDirective) -> Self {
        self.sort = sort;
        self
    }

    /// Lowercased search term, or None when no term is set.
    pub fn search_term(&self) -> Option<String> {
        if self.search.is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }
}
