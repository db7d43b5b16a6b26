// src/timeline/mod.rs

//! The task timeline engine.
//!
//! - [`task`] holds the task record and the id lookup (`TaskIndex`).
//! - [`window`] resolves the date range the timeline is drawn against.
//! - [`position`] maps a task's dates onto percentages of that range.
//! - [`readiness`] classifies a task as none / ready / blocked from its
//!   dependencies.
//! - [`edges`] builds the dependency edges used to draw arrows.
//! - [`headers`] and [`geometry`] produce column headers and connector
//!   coordinates.
//! - [`view`] is the explicit UI state (mode, filter, sort, expanded rows).
//! - [`layout`] combines all of the above; [`cache`] memoizes it.
//!
//! Everything here is synchronous and pure: inputs are read, never mutated.

pub mod cache;
pub mod edges;
pub mod geometry;
pub mod headers;
pub mod layout;
pub mod position;
pub mod readiness;
pub mod task;
pub mod view;
pub mod window;

pub use cache::LayoutCache;
pub use edges::{build_dependency_edges, edge_anchors, DependencyEdge, EdgeAnchors};
pub use geometry::{ChartGeometry, Connector, Point};
pub use headers::{timeline_headers, TimelineHeader};
pub use layout::{BarStyle, DependencyRow, LaidOutEdge, LayoutRow, TimelineLayout};
pub use position::{compute_position, effective_range, task_duration_days, TaskBar};
pub use readiness::{blockers, classify_readiness, BlockReason, Blocker, Readiness};
pub use task::{Task, TaskId, TaskIndex};
pub use view::{TaskFilter, TaskSort, ViewState};
pub use window::{compute_window, TimelineWindow};
