//! Framework-independent client core: REST transport, session handling and
//! the centralized store the UI renders from.

pub mod api;
pub mod config;
pub mod navigation;
pub mod session;
pub mod store;
pub mod timer;

pub use api::{ApiRequest, Backend, HttpBackend, ImageUpload, Method};
pub use navigation::{guard, home_path, profile_path, GuardDecision};
pub use session::{MemoryTokenStorage, TokenStorage};
pub use store::{Store, StoreState, ToastId, ToastKind};
