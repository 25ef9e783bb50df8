//! Route ordering algorithms for Waymark.
//!
//! This crate provides [`RouteOptimizer`], the default implementation of the
//! [`Optimizer`](waymark_core::Optimizer) trait, together with the building
//! blocks it selects between:
//!
//! - [`construct`]: greedy nearest-neighbour construction.
//! - [`improve`]: first-improvement 2-opt refinement with a pinned anchor.
//! - [`solve_exact`]: Held-Karp dynamic programming for small instances.
//!
//! Every routine is synchronous and side-effect free apart from logging, and
//! reports missing distances through [`DistanceError`](waymark_core::DistanceError)
//! rather than panicking.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod held_karp;
mod nearest_neighbour;
mod optimizer;
mod two_opt;

pub use held_karp::{ExactSolveError, MAX_EXACT_WAYPOINTS, solve_exact};
pub use nearest_neighbour::construct;
pub use optimizer::{OptimizerConfig, RouteOptimizer};
pub use two_opt::improve;
