mod detail;
mod favorites;
mod home;
mod results;

pub use detail::*;
pub use favorites::*;
pub use home::*;
pub use results::*;
