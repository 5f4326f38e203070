mod big;
mod interface;
mod primitive;

pub use interface::*;
