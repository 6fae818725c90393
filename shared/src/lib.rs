pub mod protocol;
pub mod entities;
pub mod abilities;

pub use protocol::*;
pub use entities::*;
pub use abilities::*;
