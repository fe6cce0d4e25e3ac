//! Application layer - Use cases and orchestration

pub mod app;
pub mod init;
pub mod manage_config;

pub use app::App;
pub use init::InitService;
pub use manage_config::ConfigService;
