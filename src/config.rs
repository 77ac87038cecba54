#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Parses the command line: exactly one positional argument, the
    /// listening port. Anything else is a usage error.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let program = args.next().unwrap_or_else(|| "tinyweb".to_string());
        let usage = format!("usage: {} <port>", program);

        let port = match (args.next(), args.next()) {
            (Some(port), None) => port,
            _ => return Err(usage),
        };

        match port.parse::<u16>() {
            Ok(port) => Ok(Self { port }),
            Err(_) => Err(usage),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
