//! Main module for noteblog library functionality

pub mod cursor;
pub mod driver;
pub mod entities;
pub mod error;
pub mod footnotes;
pub mod handlers;
pub mod loader;
pub mod options;
pub mod output;
pub mod scanner;
