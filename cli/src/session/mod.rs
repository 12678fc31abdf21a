// cli/src/session/mod.rs
#![forbid(unsafe_code)]

pub mod display;
pub mod frontend;
pub mod runner;
pub mod script;

pub use frontend::{Console, FrontEnd, MoveCmd};
pub use runner::Session;
pub use script::{parse_script, ScriptItem};
