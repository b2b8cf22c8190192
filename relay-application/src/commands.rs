pub mod migrate_commands;
pub mod payload_commands;
