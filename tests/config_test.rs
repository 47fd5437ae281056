use kafka_clients::config::{Acks, SecurityProtocol};
use kafka_clients::{ClientFactory, CommitStrategy, Config};
use std::io::Write;

fn load(contents: &str) -> Config {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    Config::from_file(file.path()).unwrap()
}

#[test]
fn test_config_file_to_client_parameters() {
    let config = load(
        r#"
        bootstrap_servers = "b1:9092"

        [consumer]
        group_id = "g1"
        enable_auto_commit = false
        "#,
    );

    let factory = ClientFactory::new(&config);
    assert_eq!(factory.commit_strategy(), CommitStrategy::StoreAndCommit);

    let consumer = factory.consumer_params().client_config();
    assert_eq!(consumer.get("bootstrap.servers"), Some("b1:9092"));
    assert_eq!(consumer.get("group.id"), Some("g1"));
    assert_eq!(consumer.get("auto.offset.reset"), Some("earliest"));
    assert_eq!(consumer.get("sasl.password"), Some(""));

    let producer = factory.producer_params().client_config();
    assert_eq!(producer.get("acks"), None);
    assert_eq!(producer.get("ssl.ca.location"), Some(""));
}

#[test]
fn test_secured_config_file() {
    let config = load(
        r#"
        bootstrap_servers = "broker-1:9093,broker-2:9093"

        [security]
        security_protocol = "sasl_ssl"
        sasl_mechanism = "SCRAM-SHA-512"
        sasl_username = "retry-job"
        sasl_password = "pw"

        [consumer]
        group_id = "retry-group"

        [producer]
        acks = "all"
        enable_idempotence = true
        "#,
    );

    assert_eq!(config.security.security_protocol, SecurityProtocol::SaslSsl);
    assert_eq!(config.producer.acks, Some(Acks::All));

    let factory = ClientFactory::new(&config);
    assert_eq!(factory.commit_strategy(), CommitStrategy::StoreOnly);

    let producer = factory.producer_params().client_config();
    assert_eq!(producer.get("acks"), Some("all"));
    assert_eq!(producer.get("enable.idempotence"), Some("true"));
    assert_eq!(producer.get("sasl.mechanism"), Some("SCRAM-SHA-512"));
    assert_eq!(producer.get("sasl.username"), Some("retry-job"));
    assert_eq!(producer.get("ssl.keystore.password"), Some(""));

    let admin = factory.admin_params().client_config();
    assert_eq!(admin.get("bootstrap.servers"), Some("broker-1:9093,broker-2:9093"));
    assert_eq!(admin.get("security.protocol"), Some("sasl_ssl"));
    assert_eq!(admin.get("group.id"), None);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(Config::from_file(dir.path().join("absent.toml")).is_err());
}
