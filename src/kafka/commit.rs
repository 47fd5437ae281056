use crate::config::Config;
use crate::Result;
use rdkafka::consumer::{BaseConsumer, CommitMode, Consumer, ConsumerContext, StreamConsumer};
use rdkafka::error::KafkaResult;
use rdkafka::Message;
use std::fmt;

/// Location of a consumed record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessagePosition {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
}

impl MessagePosition {
    pub fn new(topic: impl Into<String>, partition: i32, offset: i64) -> Self {
        Self {
            topic: topic.into(),
            partition,
            offset,
        }
    }

    /// Captures the position of a message received from a consumer.
    pub fn of<M: Message>(message: &M) -> Self {
        Self::new(message.topic(), message.partition(), message.offset())
    }
}

impl fmt::Display for MessagePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]@{}", self.topic, self.partition, self.offset)
    }
}

/// Offset bookkeeping a consumer must support for [`CommitStrategy`].
pub trait OffsetCommitter {
    /// Records `position` as processed in the consumer's local offset store.
    fn store_offset(&self, position: &MessagePosition) -> KafkaResult<()>;

    /// Synchronously commits every stored offset to the broker.
    fn commit_stored(&self) -> KafkaResult<()>;
}

/// Offset stored for a processed message: the next one to read, as
/// librdkafka's `store_offset_from_message` does.
pub fn next_offset(position: &MessagePosition) -> i64 {
    position.offset + 1
}

fn store_next<K, Ctx>(consumer: &K, position: &MessagePosition) -> KafkaResult<()>
where
    K: Consumer<Ctx>,
    Ctx: ConsumerContext,
{
    consumer.store_offset(&position.topic, position.partition, next_offset(position))
}

fn commit_sync<K, Ctx>(consumer: &K) -> KafkaResult<()>
where
    K: Consumer<Ctx>,
    Ctx: ConsumerContext,
{
    consumer.commit_consumer_state(CommitMode::Sync)
}

impl<C: ConsumerContext> OffsetCommitter for BaseConsumer<C> {
    fn store_offset(&self, position: &MessagePosition) -> KafkaResult<()> {
        store_next(self, position)
    }

    fn commit_stored(&self) -> KafkaResult<()> {
        commit_sync(self)
    }
}

impl<C: ConsumerContext + 'static> OffsetCommitter for StreamConsumer<C> {
    fn store_offset(&self, position: &MessagePosition) -> KafkaResult<()> {
        store_next(self, position)
    }

    fn commit_stored(&self) -> KafkaResult<()> {
        commit_sync(self)
    }
}

/// How a processed message is acknowledged.
///
/// Chosen once per configuration by [`CommitStrategy::select`] and then
/// applied to every successfully processed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStrategy {
    /// Store the offset only; the consumer's auto-commit timer flushes it.
    StoreOnly,
    /// Store the offset, then commit all stored offsets synchronously.
    StoreAndCommit,
}

impl CommitStrategy {
    pub fn select(config: &Config) -> Self {
        if config.consumer.enable_auto_commit {
            CommitStrategy::StoreOnly
        } else {
            CommitStrategy::StoreAndCommit
        }
    }

    /// Acknowledges the message at `position` on `consumer`.
    ///
    /// With [`CommitStrategy::StoreAndCommit`] this blocks on a broker round
    /// trip. Store and commit failures are returned to the caller untouched.
    pub fn apply<C>(&self, consumer: &C, position: &MessagePosition) -> Result<()>
    where
        C: OffsetCommitter + ?Sized,
    {
        consumer.store_offset(position)?;
        if *self == CommitStrategy::StoreAndCommit {
            consumer.commit_stored()?;
        }
        Ok(())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitStrategy::StoreOnly => "store-only",
            CommitStrategy::StoreAndCommit => "store-and-commit",
        }
    }
}

impl fmt::Display for CommitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
