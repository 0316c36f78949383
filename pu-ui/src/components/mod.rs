//! Reusable Dioxus RSX components for the site apps.

mod chart_container;
mod chart_header;
mod error_display;
mod filter_bar;
mod loading_spinner;
mod paper_card;
mod paper_list;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use filter_bar::FilterBar;
pub use loading_spinner::LoadingSpinner;
pub use paper_card::PaperCard;
pub use paper_list::PaperList;
