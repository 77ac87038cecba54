//! HTTP/1.0 protocol implementation.
//!
//! Every connection carries exactly one transaction (`Connection: close`
//! semantics throughout, no keep-alive):
//!
//! ```text
//! read request head → validate method → resolve target
//!     → stat → permission check → serve static | serve CGI
//!                                → error response on any failure
//! ```
//!
//! - **`connection`**: the per-connection transaction handler
//! - **`parser`**: parses the request head from a byte buffer
//! - **`request`**: request value type and validated method
//! - **`response`**: response value type with ordered headers
//! - **`writer`**: serializes and writes responses to the client
//! - **`mime`**: content-type derivation from the filename

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
