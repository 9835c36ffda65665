pub mod user;
pub mod contribution;
pub mod wrapped;

pub use user::*;
pub use contribution::*;
pub use wrapped::*;
