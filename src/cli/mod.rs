pub mod commands;
pub mod response;

pub use commands::{Cli, Commands};
pub use response::{Envelope, Status};
