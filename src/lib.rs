//! Maximum flow and minimum cost flow solvers over a shared residual network.
//!
//! Build a [`graph::FlowNetwork`], add edges, hand it to one solver and read
//! the results through the [`solver::FlowSolver`] getters:
//!
//! ```
//! use network_flow::graph::FlowNetwork;
//! use network_flow::maximum_flow::dinic::Dinic;
//! use network_flow::solver::FlowSolver;
//!
//! let mut network = FlowNetwork::<i64>::new(3, 0, 2)?;
//! network.add_edge(0, 1, 10)?;
//! network.add_edge(1, 2, 7)?;
//!
//! let mut solver = Dinic::new(network);
//! assert_eq!(solver.max_flow()?, 7);
//! # Ok::<(), network_flow::error::Error>(())
//! ```

pub mod error;
pub mod graph;
pub mod maximum_flow;
pub mod minimum_cost_flow;
pub mod solver;
