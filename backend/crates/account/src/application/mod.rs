//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod ledger;
pub mod login;
pub mod logout;
pub mod manager;
pub mod register;
pub mod session;

// Re-exports
pub use config::AccountConfig;
pub use ledger::LedgerUseCase;
pub use login::{LoginInput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use manager::SessionManager;
pub use register::{RegisterInput, RegisterUseCase};
pub use session::{SessionContext, SessionWriter};
