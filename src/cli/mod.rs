mod context;
mod flags;
pub mod prompts;
mod quiet;

pub use context::Context;
pub use flags::CliFlags;
