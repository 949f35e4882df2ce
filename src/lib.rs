//! # u-tourplan
//!
//! Fixed-depot tour planning over small weighted graphs: start at node 0,
//! visit every other node once, return to node 0, at minimum total weight.
//!
//! ## Modules
//!
//! - [`distance`] — Cost matrix and Dijkstra shortest-path distances
//! - [`evaluation`] — Cost of node sequences, with absent-edge detection
//! - [`models`] — The [`Tour`] output type
//! - [`search`] — Exhaustive, greedy, branch-and-bound, A*, and random strategies
//! - [`planner`] — [`plan`] and the configurable [`Planner`]
//! - [`config`] — [`PlannerConfig`]
//! - [`error`] — [`PlanningError`]
//!
//! ## Example
//!
//! ```
//! use u_tourplan::{plan, CostMatrix, StrategyKind};
//!
//! let cm = CostMatrix::from_rows(vec![
//!     vec![0.0, 1.0, 0.0, 1.0],
//!     vec![1.0, 0.0, 1.0, 0.0],
//!     vec![0.0, 1.0, 0.0, 1.0],
//!     vec![1.0, 0.0, 1.0, 0.0],
//! ])
//! .unwrap();
//! let tour = plan(&cm, StrategyKind::Informed).unwrap();
//! assert_eq!(tour.cost(), 4.0);
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod evaluation;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod models;
pub mod planner;
pub mod search;

pub use config::PlannerConfig;
pub use distance::CostMatrix;
pub use error::{PlanningError, Result};
pub use models::Tour;
pub use planner::{plan, Planner};
pub use search::StrategyKind;
