pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::StorefrontConfig;

pub use crate::core::{assembler::NavigationPageLoader, merge::merge_config};
pub use crate::domain::events::NavigationPageLoadedEvent;
pub use crate::domain::model::{
    CheckoutContext, CmsBlock, CmsPage, CmsSlot, InternalRequest, NavigationEntry,
    NavigationPage, Page, SlotConfig,
};
pub use crate::utils::error::{NavigationPageError, Result};
