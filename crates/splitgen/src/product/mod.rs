mod generator;
mod supplier;

pub use generator::*;
pub use supplier::*;
