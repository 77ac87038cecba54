use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::content::{self, ResourceMeta, cgi, error, static_files};
use crate::http::parser::{ParseError, parse_request_head};
use crate::http::request::Request;
use crate::http::response::StatusCode;

/// Logs every drained header line. Headers are never interpreted, but they
/// stay observable on the server side.
fn log_request_headers(head: &[u8]) {
    let text = String::from_utf8_lossy(head);
    for line in text.split("\r\n").skip(1) {
        if !line.is_empty() {
            debug!("Request header: {}", line);
        }
    }
}

/// One accepted client connection, carrying exactly one transaction.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
        }
    }

    /// Serves the transaction: read the request head, dispatch, respond.
    /// The connection closes when this returns, success or not.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        match self.read_request().await? {
            Some(req) => self.handle(req).await,
            // Client closed before sending a complete request
            None => Ok(()),
        }
    }

    async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parse_request_head(&self.buffer) {
                Ok((request, consumed)) => {
                    let head = self.buffer.split_to(consumed);
                    log_request_headers(&head);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    // Malformed request line. No response is defined for
                    // this case; close and let the listener log it.
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                return Ok(None);
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }

    /// The request pipeline: validate method, resolve the target, stat the
    /// resolved path, check permission bits, then serve static or dynamic
    /// content. Every failure branch answers with an error response and
    /// ends the transaction.
    async fn handle(&mut self, req: Request) -> anyhow::Result<()> {
        info!("{} {} {}", req.method, req.target, req.version);

        let method = match req.method() {
            Some(m) => m,
            None => {
                return error::client_error(
                    &mut self.stream,
                    &req.method,
                    StatusCode::NotImplemented,
                    "Tiny does not implement this method",
                )
                .await;
            }
        };

        let resource = content::resolve(&req.target);
        debug!(
            filename = %resource.filename,
            dynamic = resource.is_dynamic,
            "Resolved request target"
        );

        let meta = match ResourceMeta::stat(&resource.filename).await {
            Some(m) => m,
            None => {
                return error::client_error(
                    &mut self.stream,
                    &resource.filename,
                    StatusCode::NotFound,
                    "Tiny couldn't find this file",
                )
                .await;
            }
        };

        if resource.is_dynamic {
            if !meta.is_regular || !meta.executable {
                return error::client_error(
                    &mut self.stream,
                    &resource.filename,
                    StatusCode::Forbidden,
                    "Tiny couldn't run the CGI program",
                )
                .await;
            }

            // The CGI program sees the method token exactly as sent
            cgi::serve(
                &mut self.stream,
                &resource.filename,
                &resource.query_args,
                &req.method,
            )
            .await
        } else {
            if !meta.is_regular || !meta.readable {
                return error::client_error(
                    &mut self.stream,
                    &resource.filename,
                    StatusCode::Forbidden,
                    "Tiny couldn't read the file",
                )
                .await;
            }

            static_files::serve(&mut self.stream, &resource.filename, meta.size, method).await
        }
    }
}
