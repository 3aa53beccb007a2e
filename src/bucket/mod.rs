//! Hour bucketing of overnight detections.
//!
//! The skeleton is built once from session facts, populated in a single pass
//! over detections, then only read for durations and call counts.

mod assigner;
mod builder;
mod dedup;
mod duration;
mod key;

pub use assigner::{PopulateSummary, assign, bucket_key_for, populate};
pub use builder::{build_skeleton, clipped_bounds};
pub use dedup::estimate_individuals;
pub use duration::duration_minutes;
pub use key::{Bucket, BucketKey, BucketMap, HourLabel};
