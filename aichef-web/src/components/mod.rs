mod chef_chat;
mod error_fallback;
mod profile_switch;
mod recipe_card;

pub use chef_chat::*;
pub use error_fallback::*;
pub use profile_switch::*;
pub use recipe_card::*;
