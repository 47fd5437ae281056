use anyhow::Context;
use clap::Parser;
use kafka_clients::{ClientFactory, Config};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(name = "kafka-clients")]
#[command(about = "Builds Kafka clients from configuration and probes the cluster", long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    config: PathBuf,

    #[arg(short, long, help = "Enable JSON output for logs")]
    json_logs: bool,

    #[arg(short, long, help = "Verbose logging")]
    verbose: bool,

    #[arg(long, default_value_t = 10, help = "Metadata probe timeout in seconds")]
    probe_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.json_logs, args.verbose);

    info!("Loading configuration from {:?}", args.config);

    let config = match Config::from_file(&args.config) {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(kafka_clients::Error::Config(e).into());
        }
    };

    info!(
        kafka_brokers = %config.bootstrap_servers,
        consumer_group = %config.consumer.group_id,
        producer_client_id = %config.producer.client_id,
        security_protocol = config.security.security_protocol.as_str(),
        sasl_mechanism = config.security.sasl_mechanism.as_str(),
        "Configuration summary"
    );

    let factory = ClientFactory::new(&config);

    let _consumer = factory.build_consumer().context("creating consumer")?;
    let _producer = factory.build_producer().context("creating producer")?;
    let admin = factory
        .build_admin_client()
        .context("creating admin client")?;
    info!(
        commit_strategy = %factory.commit_strategy(),
        "Kafka consumer, producer and admin client created"
    );

    let timeout = Duration::from_secs(args.probe_timeout_secs);
    let (brokers, topics) = tokio::task::spawn_blocking(move || {
        admin
            .inner()
            .fetch_metadata(None, timeout)
            .map(|metadata| (metadata.brokers().len(), metadata.topics().len()))
    })
    .await
    .context("metadata probe task panicked")?
    .context("fetching cluster metadata")?;

    info!(brokers, topics, "Connected to Kafka cluster");

    Ok(())
}

fn init_logging(json: bool, verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("kafka_clients=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("kafka_clients=info,warn"))
    };

    let fmt_layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
