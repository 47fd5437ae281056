use crate::config::Config;
use crate::kafka::commit::CommitStrategy;
use crate::kafka::params::{AdminParams, ConsumerParams, ProducerParams};
use crate::Result;
use rdkafka::admin::AdminClient;
use rdkafka::client::DefaultClientContext;
use rdkafka::consumer::BaseConsumer;
use rdkafka::producer::FutureProducer;
use tracing::debug;

pub type ConsumerHandle = BaseConsumer;
pub type ProducerHandle = FutureProducer;
pub type AdminHandle = AdminClient<DefaultClientContext>;

/// Builds Kafka clients from a shared configuration snapshot.
///
/// Each `build_*` call creates an independent client and hands its
/// ownership to the caller. Creation may block while librdkafka starts its
/// background threads; no connection retries happen here.
#[derive(Debug, Clone, Copy)]
pub struct ClientFactory<'a> {
    config: &'a Config,
}

impl<'a> ClientFactory<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    pub fn consumer_params(&self) -> ConsumerParams {
        ConsumerParams::from_config(self.config)
    }

    pub fn producer_params(&self) -> ProducerParams {
        ProducerParams::from_config(self.config)
    }

    pub fn admin_params(&self) -> AdminParams {
        AdminParams::from_config(self.config)
    }

    pub fn build_consumer(&self) -> Result<ConsumerHandle> {
        let params = self.consumer_params();
        debug!(
            brokers = %params.bootstrap_servers,
            group_id = %params.group_id,
            auto_commit = params.enable_auto_commit,
            auto_offset_store = params.enable_auto_offset_store,
            security_protocol = params.security.security_protocol.as_str(),
            "Creating Kafka consumer"
        );

        let consumer: ConsumerHandle = params.client_config().create()?;
        Ok(consumer)
    }

    pub fn build_producer(&self) -> Result<ProducerHandle> {
        let params = self.producer_params();
        debug!(
            brokers = %params.bootstrap_servers,
            client_id = %params.client_id,
            idempotence = params.enable_idempotence,
            acks = params.acks.map(|a| a.as_str()).unwrap_or("default"),
            security_protocol = params.security.security_protocol.as_str(),
            "Creating Kafka producer"
        );

        let producer: ProducerHandle = params.client_config().create()?;
        Ok(producer)
    }

    pub fn build_admin_client(&self) -> Result<AdminHandle> {
        let params = self.admin_params();
        debug!(
            brokers = %params.bootstrap_servers,
            security_protocol = params.security.security_protocol.as_str(),
            "Creating Kafka admin client"
        );

        let admin: AdminHandle = params.client_config().create()?;
        Ok(admin)
    }

    pub fn commit_strategy(&self) -> CommitStrategy {
        CommitStrategy::select(self.config)
    }
}
