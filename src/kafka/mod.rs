pub mod commit;
pub mod factory;
pub mod params;


pub use commit::{next_offset, CommitStrategy, MessagePosition, OffsetCommitter};
pub use factory::{AdminHandle, ClientFactory, ConsumerHandle, ProducerHandle};
pub use params::{AdminParams, AutoOffsetReset, ConsumerParams, ProducerParams, SecurityParams};
