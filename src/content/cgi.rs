//! Dynamic content: running a CGI program and handing it the rest of the
//! response.

use std::process::Stdio;

use anyhow::Context;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::process::Command;
use tracing::debug;

use crate::http::response::SERVER_NAME;

/// Runs `program` and streams its stdout to the client.
///
/// The server writes only the status line and the Server header; the
/// program owns everything after that, including its own Content-type and
/// the blank line separating headers from body. The program's output is
/// not validated.
///
/// Request metadata reaches the program through `QUERY_STRING` and
/// `REQUEST_METHOD`, set explicitly on the child (the parent environment
/// is inherited but never mutated). The call returns once the child has
/// been reaped; there is no timeout and no output cap.
pub async fn serve(
    stream: &mut TcpStream,
    program: &str,
    query_args: &str,
    method: &str,
) -> anyhow::Result<()> {
    let preamble = format!("HTTP/1.0 200 OK\r\nServer: {}\r\n", SERVER_NAME);
    stream.write_all(preamble.as_bytes()).await?;
    stream.flush().await?;

    // A spawn failure past this point leaves the client with a truncated
    // response; the error is logged at the listener, not sent on the wire.
    let mut child = Command::new(program)
        .env("QUERY_STRING", query_args)
        .env("REQUEST_METHOD", method)
        .stdout(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to spawn {}", program))?;

    let mut stdout = child
        .stdout
        .take()
        .context("child stdout was not captured")?;
    tokio::io::copy(&mut stdout, stream).await?;

    let status = child.wait().await?;
    debug!(program, code = ?status.code(), "CGI program exited");

    Ok(())
}
