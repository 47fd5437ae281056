mod common;

use common::{get_test_config, test_topic};
use kafka_clients::kafka::{next_offset, MessagePosition};
use kafka_clients::ClientFactory;
use rdkafka::admin::{AdminOptions, NewTopic, TopicReplication};
use rdkafka::consumer::Consumer;
use rdkafka::producer::FutureRecord;
use rdkafka::{Message, Offset, TopicPartitionList};
use std::time::Duration;

async fn produce_one(factory: &ClientFactory<'_>, topic: &str, payload: &str) {
    let admin = factory.build_admin_client().unwrap();
    let new_topic = NewTopic::new(topic, 1, TopicReplication::Fixed(1));
    let opts = AdminOptions::new().operation_timeout(Some(Duration::from_secs(30)));
    admin.create_topics(&[new_topic], &opts).await.unwrap();

    let producer = factory.build_producer().unwrap();
    producer
        .send(
            FutureRecord::to(topic).payload(payload).key("key"),
            Duration::from_secs(10),
        )
        .await
        .map_err(|(e, _)| e)
        .unwrap();
}

fn committed_offset(factory: &ClientFactory<'_>, topic: &str) -> Offset {
    let consumer = factory.build_consumer().unwrap();
    let mut tpl = TopicPartitionList::new();
    tpl.add_partition(topic, 0);
    let committed = consumer
        .committed_offsets(tpl, Duration::from_secs(10))
        .unwrap();
    committed.find_partition(topic, 0).unwrap().offset()
}

#[tokio::test]
#[ignore] // Requires running Kafka
async fn test_store_and_commit_commits_synchronously() {
    let config = get_test_config(false);
    let factory = ClientFactory::new(&config);
    let topic = test_topic("store_and_commit");

    produce_one(&factory, &topic, "hello").await;

    let consumer = factory.build_consumer().unwrap();
    consumer.subscribe(&[topic.as_str()]).unwrap();

    let message = loop {
        match consumer.poll(Duration::from_secs(1)) {
            Some(result) => break result.unwrap(),
            None => continue,
        }
    };
    assert_eq!(message.payload(), Some("hello".as_bytes()));

    let position = MessagePosition::of(&message);
    factory
        .commit_strategy()
        .apply(&consumer, &position)
        .unwrap();

    // The committed offset is the next one to read.
    assert_eq!(
        committed_offset(&factory, &topic),
        Offset::Offset(next_offset(&position))
    );
}

#[tokio::test]
#[ignore] // Requires running Kafka
async fn test_store_only_leaves_commit_to_auto_commit() {
    let config = get_test_config(true);
    let factory = ClientFactory::new(&config);
    let topic = test_topic("store_only");

    produce_one(&factory, &topic, "hello").await;

    let consumer = factory.build_consumer().unwrap();
    consumer.subscribe(&[topic.as_str()]).unwrap();

    let message = loop {
        match consumer.poll(Duration::from_secs(1)) {
            Some(result) => break result.unwrap(),
            None => continue,
        }
    };

    factory
        .commit_strategy()
        .apply(&consumer, &MessagePosition::of(&message))
        .unwrap();

    // Nothing reaches the broker until the auto-commit timer fires.
    assert_eq!(committed_offset(&factory, &topic), Offset::Invalid);
}

#[test]
#[ignore] // Requires running Kafka
fn test_admin_client_fetches_metadata() {
    let config = get_test_config(true);
    let factory = ClientFactory::new(&config);

    let admin = factory.build_admin_client().unwrap();
    let metadata = admin
        .inner()
        .fetch_metadata(None, Duration::from_secs(10))
        .unwrap();

    assert!(!metadata.brokers().is_empty());
}
