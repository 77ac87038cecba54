//! Static file serving.

use anyhow::Context;
use tokio::net::TcpStream;
use tracing::debug;

use crate::http::mime;
use crate::http::request::Method;
use crate::http::response::{ResponseBuilder, SERVER_NAME, StatusCode};
use crate::http::writer::ResponseWriter;

/// Sends a 200 response for a regular, readable file.
///
/// `filesize` is the stat-reported size and is what Content-length carries,
/// for GET and HEAD alike. A HEAD response stops after the headers; a GET
/// response reads the whole file into memory before the body is written.
pub async fn serve(
    stream: &mut TcpStream,
    filename: &str,
    filesize: u64,
    method: Method,
) -> anyhow::Result<()> {
    let filetype = mime::filetype(filename);

    let mut builder = ResponseBuilder::new(StatusCode::Ok)
        .header("Server", SERVER_NAME)
        .header("Connection", "close")
        .header("Content-length", filesize.to_string())
        .header("Content-type", filetype);

    if method == Method::Get {
        let body = tokio::fs::read(filename)
            .await
            .with_context(|| format!("failed to read {}", filename))?;
        builder = builder.body(body);
    }

    debug!(filename, filetype, filesize, "Serving static content");

    let response = builder.build();
    ResponseWriter::new(&response).write_to_stream(stream).await
}
