//! Value objects making up a version stamp.

pub mod component;
pub mod prefix;
pub mod revision;

pub use component::{ComponentField, VersionComponent};
pub use prefix::ConstPrefix;
pub use revision::Revision;
