//! Tinyweb - Minimal HTTP/1.0 Web Server
//!
//! Serves static files from the document root (the process working
//! directory) and the output of `cgi-bin` programs, one connection at a
//! time, one transaction per connection.

pub mod config;
pub mod content;
pub mod http;
pub mod server;
