pub mod budget;
pub mod calendar;
pub mod classifier;
pub mod money;
pub mod optimizer;
pub mod projection;
pub mod report;
pub mod rotation;
pub mod scoring;
pub mod telemetry;
pub mod timeline;
pub mod usage;

pub use optimizer::{optimize, Optimizer, OptimizerError, OptimizerSettings};
pub use scoring::ScoreWeights;
pub use telemetry::{NoopTelemetry, OptimizerTelemetry, TracingTelemetry};
pub use timeline::{subscription_timeline, SubscriptionTimeline};
