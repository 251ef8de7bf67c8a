#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Reject invalid timestamps with a 400. When unset, they encode to "".
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            strict: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("HOST").unwrap_or(defaults.host);

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(%raw, "PORT is not a valid port, using {}", defaults.port);
                defaults.port
            }),
            Err(_) => defaults.port,
        };

        let strict = std::env::var("LEXICOID_STRICT")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.strict);

        Self { host, port, strict }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
