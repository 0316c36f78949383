//! Language filter behind the catalog's toggle buttons.

use crate::locale::UiText;
use crate::paper::{Language, Paper};
use std::fmt;
use std::str::FromStr;

/// Value of a filter button's `data-filter` attribute.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum FilterCriterion {
    #[default]
    All,
    Chinese,
    English,
}

impl FilterCriterion {
    /// Buttons in the order they appear in the filter bar.
    pub const ALL: [FilterCriterion; 3] = [
        FilterCriterion::All,
        FilterCriterion::Chinese,
        FilterCriterion::English,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterCriterion::All => "all",
            FilterCriterion::Chinese => "chinese",
            FilterCriterion::English => "english",
        }
    }

    /// Button caption.
    pub fn label(&self, text: &UiText) -> &'static str {
        match self {
            FilterCriterion::All => text.filter_all,
            FilterCriterion::Chinese => text.filter_chinese,
            FilterCriterion::English => text.filter_english,
        }
    }

    /// Whether a paper in `language` passes this filter.
    pub fn matches(&self, language: Language) -> bool {
        match self {
            FilterCriterion::All => true,
            FilterCriterion::Chinese => language == Language::Chinese,
            FilterCriterion::English => language == Language::English,
        }
    }
}

impl FromStr for FilterCriterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterCriterion::All),
            "chinese" => Ok(FilterCriterion::Chinese),
            "english" => Ok(FilterCriterion::English),
            other => Err(format!("unknown filter '{}'", other)),
        }
    }
}

impl fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Return the papers that pass `criterion`, keeping their original order.
///
/// The source slice is never touched; callers get clones so the result can
/// be handed straight to a render.
pub fn filter_papers(papers: &[Paper], criterion: FilterCriterion) -> Vec<Paper> {
    papers
        .iter()
        .filter(|p| criterion.matches(p.language))
        .cloned()
        .collect()
}
