pub mod context;
pub mod lifecycle;

pub use context::AppContext;
pub use lifecycle::{run_canonicalize, run_migrate_advancements, run_validate, RunReport};
