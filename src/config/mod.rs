#[cfg(feature = "cli")]
pub mod cli;
pub mod storefront;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use storefront::{StorefrontConfig, StorefrontSettings};
