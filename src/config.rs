use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Immutable configuration snapshot the client factory reads from.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Comma separated `host:port` list.
    pub bootstrap_servers: String,
    #[serde(default)]
    pub security: SecurityConfig,
    pub consumer: ConsumerConfig,
    #[serde(default)]
    pub producer: ProducerConfig,
}

#[derive(Clone, Deserialize, Serialize, Default)]
pub struct SecurityConfig {
    #[serde(default)]
    pub security_protocol: SecurityProtocol,
    #[serde(default)]
    pub sasl_mechanism: SaslMechanism,
    pub sasl_username: Option<String>,
    pub sasl_password: Option<String>,
    pub ssl_ca_location: Option<String>,
    pub ssl_keystore_password: Option<String>,
}

// Secrets never reach log output.
impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("security_protocol", &self.security_protocol)
            .field("sasl_mechanism", &self.sasl_mechanism)
            .field("sasl_username", &self.sasl_username)
            .field("sasl_password", &self.sasl_password.as_ref().map(|_| "***"))
            .field("ssl_ca_location", &self.ssl_ca_location)
            .field(
                "ssl_keystore_password",
                &self.ssl_keystore_password.as_ref().map(|_| "***"),
            )
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SecurityProtocol {
    #[default]
    Plaintext,
    Ssl,
    SaslPlaintext,
    SaslSsl,
}

impl SecurityProtocol {
    /// Value of librdkafka's `security.protocol` property.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityProtocol::Plaintext => "plaintext",
            SecurityProtocol::Ssl => "ssl",
            SecurityProtocol::SaslPlaintext => "sasl_plaintext",
            SecurityProtocol::SaslSsl => "sasl_ssl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
pub enum SaslMechanism {
    #[serde(rename = "GSSAPI")]
    Gssapi,
    #[default]
    #[serde(rename = "PLAIN")]
    Plain,
    #[serde(rename = "SCRAM-SHA-256")]
    ScramSha256,
    #[serde(rename = "SCRAM-SHA-512")]
    ScramSha512,
    #[serde(rename = "OAUTHBEARER")]
    OAuthBearer,
}

impl SaslMechanism {
    /// Value of librdkafka's `sasl.mechanism` property.
    pub fn as_str(&self) -> &'static str {
        match self {
            SaslMechanism::Gssapi => "GSSAPI",
            SaslMechanism::Plain => "PLAIN",
            SaslMechanism::ScramSha256 => "SCRAM-SHA-256",
            SaslMechanism::ScramSha512 => "SCRAM-SHA-512",
            SaslMechanism::OAuthBearer => "OAUTHBEARER",
        }
    }
}

/// Producer acknowledgment level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Acks {
    #[serde(rename = "0", alias = "none")]
    None,
    #[serde(rename = "1", alias = "leader")]
    Leader,
    #[serde(rename = "all", alias = "-1")]
    All,
}

impl Acks {
    pub fn as_str(&self) -> &'static str {
        match self {
            Acks::None => "0",
            Acks::Leader => "1",
            Acks::All => "all",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsumerConfig {
    pub group_id: String,
    #[serde(default = "default_enable_auto_commit")]
    pub enable_auto_commit: bool,
    #[serde(default)]
    pub enable_auto_offset_store: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProducerConfig {
    #[serde(default = "default_client_id")]
    pub client_id: String,
    #[serde(default)]
    pub enable_idempotence: bool,
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
    #[serde(default = "default_linger_ms")]
    pub linger_ms: u32,
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u32,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u32,
    #[serde(default = "default_message_max_bytes")]
    pub message_max_bytes: u32,
    /// Left to the librdkafka default when absent.
    pub acks: Option<Acks>,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            client_id: default_client_id(),
            enable_idempotence: false,
            batch_size: default_batch_size(),
            linger_ms: default_linger_ms(),
            message_timeout_ms: default_message_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            message_max_bytes: default_message_max_bytes(),
            acks: None,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("KAFKA_CLIENTS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }
}

fn default_enable_auto_commit() -> bool {
    true
}

fn default_client_id() -> String {
    "kafka-clients".to_string()
}

fn default_batch_size() -> u32 {
    16384
}

fn default_linger_ms() -> u32 {
    5
}

fn default_message_timeout_ms() -> u32 {
    300_000 // 5 minutes
}

fn default_request_timeout_ms() -> u32 {
    30_000
}

fn default_message_max_bytes() -> u32 {
    1_000_000
}
