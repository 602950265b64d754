/// Value tree decode command.
pub mod dump;
/// Compiled-file header command.
pub mod info;
/// JSON rendering of decoded values.
pub mod json;
/// Text rendering of decoded values.
pub mod print;
/// Code-object listing command.
pub mod units;
/// Shared input and argument helpers.
pub mod util;
