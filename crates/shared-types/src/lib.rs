pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Federation domain modules
pub mod club;
pub mod coach;
pub mod dashboard;
pub mod partner;
pub mod player;
pub mod profile;
pub mod state_committee;

pub use config::*;
pub use error::*;
pub use models::*;

pub use club::*;
pub use coach::*;
pub use dashboard::*;
pub use partner::*;
pub use player::*;
pub use profile::*;
pub use state_committee::*;
