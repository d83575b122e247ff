//! Construct handlers
//!
//! Each handler is called by the driver right after its trigger character has
//! been consumed. It reads exactly what it needs from the scanner's cursor, pushes
//! back the first character it does not own, and writes its markup (including
//! every closing tag, even at end of stream) before returning.

pub mod code;
pub mod emphasis;
pub mod footnote;
pub mod header;
pub mod image;
pub mod list;
pub mod table;
