pub mod config;
pub mod error;
pub mod nav;
pub mod post;

pub use config::{AppConfig, ScrollConfig};
pub use error::{Error, Result};
pub use nav::{Section, SectionNavigator, SectionState};
