pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod stat_card;
pub mod styles;
pub mod toast_region;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form::*;
pub use input::*;
pub use page_header::*;
pub use skeleton::*;
pub use stat_card::*;
pub use styles::*;
pub use toast_region::*;
