pub mod presets;
pub mod source;
pub mod tables;

pub mod mock;

pub use presets::{Layout, Preset, Variant};
pub use source::{EmbeddedSource, TableSource};
