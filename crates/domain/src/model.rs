pub mod stamp;

pub use stamp::{VersionStamp, VersionStampBuilder};
