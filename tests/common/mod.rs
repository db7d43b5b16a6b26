#![allow(dead_code)]

pub use taskline_test_utils::builders;
pub use taskline_test_utils::{
    date, init_tracing, with_timeout, FakeRenderer, SnapshotBuilder, TaskBuilder,
};
