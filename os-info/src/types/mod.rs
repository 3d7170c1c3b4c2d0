//! Fact types and the assembled record

mod network;
mod record;
mod system;
mod user;

pub use network::*;
pub use record::*;
pub use system::*;
pub use user::*;
