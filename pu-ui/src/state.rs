//! Application state managed via Dioxus context.
//!
//! Each app provides its own state struct with `use_context_provider`; child
//! components retrieve it with `use_context::<...>()`.

use dioxus::prelude::*;
use pu_model::filter::{filter_papers, FilterCriterion};
use pu_model::locale::Locale;
use pu_model::paper::Paper;
use pu_model::statistics::Statistics;
use pu_model::LoadError;

/// Lifecycle of a fetched resource.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// Holds the user-facing message, never the raw error
    Failed(String),
}

impl<T> LoadState<T> {
    /// Collapse a load result into page state. Errors are logged and replaced
    /// by `message`.
    pub fn from_result(result: Result<T, LoadError>, message: &str) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => {
                log::error!("{}", e);
                LoadState::Failed(message.to_string())
            }
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Papers to show for the current load state and filter. Empty unless loaded.
pub fn visible_papers(papers: &LoadState<Vec<Paper>>, criterion: FilterCriterion) -> Vec<Paper> {
    papers
        .ready()
        .map(|all| filter_papers(all, criterion))
        .unwrap_or_default()
}

/// State for the paper catalog app.
#[derive(Clone, Copy)]
pub struct CatalogState {
    /// Full collection, in file order
    pub papers: Signal<LoadState<Vec<Paper>>>,
    /// Currently active filter button
    pub filter: Signal<FilterCriterion>,
    /// Per-card animation delay step in seconds
    pub stagger_secs: Signal<f64>,
    pub locale: Signal<Locale>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            papers: Signal::new(LoadState::Loading),
            filter: Signal::new(FilterCriterion::All),
            stagger_secs: Signal::new(0.1),
            locale: Signal::new(Locale::default()),
        }
    }
}

/// State for the chart dashboard app.
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub statistics: Signal<LoadState<Statistics>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            statistics: Signal::new(LoadState::Loading),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pu_model::paper::PaperCollection;

    const PAPERS_ERROR: &str = "Failed to load paper data.";

    const EXAMPLE_JSON: &str = r#"{"papers":[
        {"title":"A","authors":"X","year":2020,"source":"S","language":"chinese","onlineLink":"u1"},
        {"title":"B","authors":"Y","year":2021,"source":"S2","language":"english","onlineLink":"u2","pdfLink":"p2"}
    ]}"#;

    #[test]
    fn test_failed_load_shows_one_message_and_no_papers() {
        let state: LoadState<Vec<Paper>> = LoadState::from_result(
            Err(LoadError::Status {
                url: "data/papers.json".to_string(),
                status: 500,
            }),
            PAPERS_ERROR,
        );
        assert_eq!(state.error(), Some(PAPERS_ERROR));
        assert!(state.ready().is_none());
        assert!(visible_papers(&state, FilterCriterion::All).is_empty());
    }

    #[test]
    fn test_malformed_body_is_a_failure() {
        let result = PaperCollection::from_json("<html>").map(|c| c.papers);
        let state = LoadState::from_result(result, PAPERS_ERROR);
        assert_eq!(state, LoadState::Failed(PAPERS_ERROR.to_string()));
    }

    #[test]
    fn test_loading_shows_nothing() {
        let state: LoadState<Vec<Paper>> = LoadState::Loading;
        assert!(state.is_loading());
        assert!(state.error().is_none());
        assert!(visible_papers(&state, FilterCriterion::Chinese).is_empty());
    }

    #[test]
    fn test_visible_papers_follow_filter() {
        let result = PaperCollection::from_json(EXAMPLE_JSON).map(|c| c.papers);
        let state = LoadState::from_result(result, PAPERS_ERROR);

        assert_eq!(visible_papers(&state, FilterCriterion::All).len(), 2);

        let chinese = visible_papers(&state, FilterCriterion::Chinese);
        assert_eq!(chinese.len(), 1);
        assert_eq!(chinese[0].title, "A");

        let english = visible_papers(&state, FilterCriterion::English);
        assert_eq!(english.len(), 1);
        assert_eq!(english[0].title, "B");
        assert_eq!(english[0].links().len(), 2);
    }

    #[test]
    fn test_rendering_twice_gives_same_list() {
        let result = PaperCollection::from_json(EXAMPLE_JSON).map(|c| c.papers);
        let state = LoadState::from_result(result, PAPERS_ERROR);
        let first = visible_papers(&state, FilterCriterion::English);
        let second = visible_papers(&state, FilterCriterion::English);
        assert_eq!(first, second);
    }
}
