mod error;
pub use error::*;
pub mod packer;
pub use packer::*;
pub mod parser;
pub mod processor;
pub mod reader;
pub mod verify;
