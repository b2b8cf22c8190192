// Domain services
pub mod codec;

pub use codec::*;
