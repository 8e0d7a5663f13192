pub mod feed;
pub mod generator;

pub use feed::{spawn_feed, FeedHandle};
pub use generator::{initialize, tick, GeneratorParams, Noise};
