mod cart;
mod catalog;
mod fetcher;
pub mod money;

pub use cart::*;
pub use catalog::*;
pub use fetcher::*;
