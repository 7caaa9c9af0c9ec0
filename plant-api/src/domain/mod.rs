mod category;
mod plant;
pub mod shape;

pub use category::*;
pub use plant::*;

/// Fallback identifier for records the API ships without any id field.
/// Only stable within a single load cycle; the next fetch mints a new one.
pub(crate) fn random_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
