mod func;
mod identity;
mod interface;

pub use func::*;
pub use identity::*;
pub use interface::*;
