mod feedback;
mod header;
mod indicators;
mod sections;
mod status_bar;

pub use feedback::FeedbackWidget;
pub use header::HeaderWidget;
pub use indicators::IndicatorsWidget;
pub use sections::SectionsWidget;
pub use status_bar::StatusBarWidget;
