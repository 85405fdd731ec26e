//! Contains common text reading and writing functionality.

mod json_writer;
pub use self::json_writer::write_json;

mod token_reader;
pub(crate) use self::token_reader::{MISSING_TOKEN, TokenReader};
