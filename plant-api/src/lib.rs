mod catalog_url;
mod client;
pub mod domain;

pub use catalog_url::*;
pub use client::*;
