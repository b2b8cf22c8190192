// Domain value objects
pub mod death_type;
pub mod record_kind;

pub use death_type::*;
pub use record_kind::*;
