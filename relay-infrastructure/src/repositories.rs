pub mod payload_files;

pub use payload_files::*;
