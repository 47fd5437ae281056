use kafka_clients::config::{Config, ConsumerConfig, ProducerConfig, SecurityConfig};
use std::env;

/// Get test configuration from environment variables
pub fn get_test_config(enable_auto_commit: bool) -> Config {
    // Use TEST_ prefix for test environment variables
    let consumer = ConsumerConfig {
        group_id: format!("test_group_{}", std::process::id()),
        enable_auto_commit,
        enable_auto_offset_store: false,
    };

    let producer = ProducerConfig {
        client_id: format!("test_client_{}", std::process::id()),
        linger_ms: 0, // Immediate sending for tests
        batch_size: 1,
        ..Default::default()
    };

    Config {
        bootstrap_servers: env::var("TEST_KAFKA_BROKERS")
            .unwrap_or_else(|_| "localhost:9092".to_string()),
        security: SecurityConfig::default(),
        consumer,
        producer,
    }
}

pub fn test_topic(name: &str) -> String {
    format!("test_{}_{}", name, std::process::id())
}
