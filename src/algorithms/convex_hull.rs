pub mod monotone_chain;

pub use monotone_chain::{Collinear, MonotoneChain};
