// Domain entities
pub mod advancement;
pub mod chat;
pub mod death;
pub mod envelope;
pub mod kill;
pub mod legacy;
pub mod model;
pub mod presence;

pub use advancement::*;
pub use chat::*;
pub use death::*;
pub use envelope::*;
pub use kill::*;
pub use legacy::*;
pub use model::*;
pub use presence::*;
