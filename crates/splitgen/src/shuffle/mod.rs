mod compose;
mod feistel;
mod interface;
mod network;
mod range;
#[cfg(test)]
mod tests;

pub use compose::*;
pub use feistel::*;
pub use interface::*;
pub use network::*;
pub use range::*;
