mod app;
pub mod background;
pub mod carousel;
pub mod config;
pub mod content;
pub mod filter;
pub mod mailto;
pub mod skills;
pub mod state;
pub mod status;
pub mod views;

pub use app::PortfolioApp;
