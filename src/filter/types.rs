use std::fmt;

use serde::Serialize;

/// Which slice of the catalog is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Category {
    /// Every record
    #[default]
    All,
    /// Records tagged as coders
    Coding,
    /// Records published by one company (compared case-insensitively)
    Company(String),
}

impl Category {
    /// Parses a category id as typed by a user or sent in a query string.
    ///
    /// "all" and "coding" are keywords in any case, anything else names
    /// a company. An empty id falls back to `All`.
    pub fn parse(id: &str) -> Self {
        let id = id.trim();
        if id.is_empty() || id.eq_ignore_ascii_case("all") {
            Category::All
        } else if id.eq_ignore_ascii_case("coding") {
            Category::Coding
        } else {
            Category::Company(id.to_string())
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Category::All => "all",
            Category::Coding => "coding",
            Category::Company(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Current category plus free-text search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: Category,
    pub search: String,
}

impl FilterState {
    pub fn new(category: Category, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }
}

/// One button of the filter bar.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FilterOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// Filter bar buttons, in display order.
pub const FILTER_OPTIONS: [FilterOption; 8] = [
    FilterOption { id: "all", label: "All Models" },
    FilterOption { id: "OpenAI", label: "OpenAI" },
    FilterOption { id: "Anthropic", label: "Anthropic" },
    FilterOption { id: "Google", label: "Google" },
    FilterOption { id: "Mistral", label: "Mistral" },
    FilterOption { id: "Perplexity", label: "Perplexity" },
    FilterOption { id: "Meta", label: "Meta" },
    FilterOption { id: "coding", label: "Coding" },
];

impl FilterOption {
    /// Whether this button corresponds to `category`.
    pub fn is_active(&self, category: &Category) -> bool {
        self.id.eq_ignore_ascii_case(category.id())
    }
}
