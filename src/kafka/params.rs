//! Role-specific connection parameters derived from a [`Config`].
//!
//! Each record is a pure projection of the configuration. Optional
//! credentials that are absent are carried as empty strings, because
//! librdkafka expects every one of these keys to hold a string value.
//! [`SecurityParams`] is shared by all three roles.

use crate::config::{Acks, Config, SaslMechanism, SecurityConfig, SecurityProtocol};
use rdkafka::ClientConfig;

/// Initial offset policy for consumers without a committed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoOffsetReset {
    Earliest,
}

impl AutoOffsetReset {
    pub fn as_str(&self) -> &'static str {
        match self {
            AutoOffsetReset::Earliest => "earliest",
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct SecurityParams {
    pub security_protocol: SecurityProtocol,
    pub sasl_mechanism: SaslMechanism,
    pub sasl_username: String,
    pub sasl_password: String,
    pub ssl_ca_location: String,
    pub ssl_keystore_password: String,
}

impl SecurityParams {
    pub fn from_config(security: &SecurityConfig) -> Self {
        Self {
            security_protocol: security.security_protocol,
            sasl_mechanism: security.sasl_mechanism,
            sasl_username: security.sasl_username.clone().unwrap_or_default(),
            sasl_password: security.sasl_password.clone().unwrap_or_default(),
            ssl_ca_location: security.ssl_ca_location.clone().unwrap_or_default(),
            ssl_keystore_password: security.ssl_keystore_password.clone().unwrap_or_default(),
        }
    }

    fn apply(&self, client_config: &mut ClientConfig) {
        client_config
            .set("security.protocol", self.security_protocol.as_str())
            .set("sasl.mechanism", self.sasl_mechanism.as_str())
            .set("sasl.username", &self.sasl_username)
            .set("sasl.password", &self.sasl_password)
            .set("ssl.ca.location", &self.ssl_ca_location)
            .set("ssl.keystore.password", &self.ssl_keystore_password);
    }
}

impl std::fmt::Debug for SecurityParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityParams")
            .field("security_protocol", &self.security_protocol)
            .field("sasl_mechanism", &self.sasl_mechanism)
            .field("sasl_username", &self.sasl_username)
            .field("ssl_ca_location", &self.ssl_ca_location)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerParams {
    pub bootstrap_servers: String,
    pub group_id: String,
    pub enable_auto_commit: bool,
    pub enable_auto_offset_store: bool,
    pub auto_offset_reset: AutoOffsetReset,
    pub security: SecurityParams,
}

impl ConsumerParams {
    pub fn from_config(config: &Config) -> Self {
        Self {
            bootstrap_servers: config.bootstrap_servers.clone(),
            group_id: config.consumer.group_id.clone(),
            enable_auto_commit: config.consumer.enable_auto_commit,
            enable_auto_offset_store: config.consumer.enable_auto_offset_store,
            auto_offset_reset: AutoOffsetReset::Earliest,
            security: SecurityParams::from_config(&config.security),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut client_config = ClientConfig::new();
        client_config
            .set("bootstrap.servers", &self.bootstrap_servers)
            .set("group.id", &self.group_id)
            .set("auto.offset.reset", self.auto_offset_reset.as_str())
            .set("enable.auto.commit", self.enable_auto_commit.to_string())
            .set(
                "enable.auto.offset.store",
                self.enable_auto_offset_store.to_string(),
            );
        self.security.apply(&mut client_config);
        client_config
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerParams {
    pub bootstrap_servers: String,
    pub client_id: String,
    pub enable_idempotence: bool,
    pub batch_size: u32,
    pub linger_ms: u32,
    pub message_timeout_ms: u32,
    pub request_timeout_ms: u32,
    pub message_max_bytes: u32,
    pub acks: Option<Acks>,
    pub security: SecurityParams,
}

impl ProducerParams {
    pub fn from_config(config: &Config) -> Self {
        let producer = &config.producer;
        Self {
            bootstrap_servers: config.bootstrap_servers.clone(),
            client_id: producer.client_id.clone(),
            enable_idempotence: producer.enable_idempotence,
            batch_size: producer.batch_size,
            linger_ms: producer.linger_ms,
            message_timeout_ms: producer.message_timeout_ms,
            request_timeout_ms: producer.request_timeout_ms,
            message_max_bytes: producer.message_max_bytes,
            acks: producer.acks,
            security: SecurityParams::from_config(&config.security),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut client_config = ClientConfig::new();
        client_config
            .set("bootstrap.servers", &self.bootstrap_servers)
            .set("client.id", &self.client_id)
            .set("enable.idempotence", self.enable_idempotence.to_string())
            .set("batch.size", self.batch_size.to_string())
            .set("linger.ms", self.linger_ms.to_string())
            .set("message.timeout.ms", self.message_timeout_ms.to_string())
            .set("request.timeout.ms", self.request_timeout_ms.to_string())
            .set("message.max.bytes", self.message_max_bytes.to_string());

        // Without an override the librdkafka default stays in effect.
        if let Some(acks) = self.acks {
            client_config.set("acks", acks.as_str());
        }

        self.security.apply(&mut client_config);
        client_config
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminParams {
    pub bootstrap_servers: String,
    pub security: SecurityParams,
}

impl AdminParams {
    pub fn from_config(config: &Config) -> Self {
        Self {
            bootstrap_servers: config.bootstrap_servers.clone(),
            security: SecurityParams::from_config(&config.security),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut client_config = ClientConfig::new();
        client_config.set("bootstrap.servers", &self.bootstrap_servers);
        self.security.apply(&mut client_config);
        client_config
    }
}
