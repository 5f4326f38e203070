mod characteristics;
mod engine;
#[cfg(feature = "rayon")]
mod parallel;

pub use characteristics::*;
pub use engine::*;
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
#[cfg(feature = "rayon")]
pub use parallel::*;
