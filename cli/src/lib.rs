// cli/src/lib.rs
#![forbid(unsafe_code)]

pub mod session;
