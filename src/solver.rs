use crate::error::Error;
use crate::graph::{FlowNetwork, FlowNum};
use std::collections::VecDeque;

/// Bookkeeping shared by every solver: the owned network, the memoized solve
/// outcome, the accumulated outputs and the visited-epoch counter.
pub struct SolverCore<Flow> {
    pub(crate) network: FlowNetwork<Flow>,
    pub(crate) max_flow: Flow,
    pub(crate) min_cost: Flow,
    pub(crate) min_cut: Vec<bool>,

    // A node is visited iff visited[u] == token, so a single increment marks
    // every node unvisited between augmenting-path iterations in O(1).
    visited: Vec<u64>,
    token: u64,

    outcome: Option<Result<(), Error>>,
}

impl<Flow> SolverCore<Flow>
where
    Flow: FlowNum,
{
    pub(crate) fn new(network: FlowNetwork<Flow>) -> Self {
        let num_nodes = network.num_nodes();
        Self {
            network,
            max_flow: Flow::zero(),
            min_cost: Flow::zero(),
            min_cut: vec![false; num_nodes],
            visited: vec![0; num_nodes],
            token: 1,
            outcome: None,
        }
    }

    #[inline]
    pub(crate) fn visit(&mut self, u: usize) {
        self.visited[u] = self.token;
    }

    #[inline]
    pub(crate) fn is_visited(&self, u: usize) -> bool {
        self.visited[u] == self.token
    }

    #[inline]
    pub(crate) fn mark_all_unvisited(&mut self) {
        self.token += 1;
    }

    pub(crate) fn add_flow(&mut self, delta: Flow) -> Result<(), Error> {
        self.max_flow = self.max_flow.checked_add(&delta).ok_or(Error::Overflow)?;
        Ok(())
    }

    pub(crate) fn add_cost(&mut self, bottleneck: Flow, unit_cost: Flow) -> Result<(), Error> {
        let cost = bottleneck.checked_mul(&unit_cost).ok_or(Error::Overflow)?;
        self.min_cost = self.min_cost.checked_add(&cost).ok_or(Error::Overflow)?;
        Ok(())
    }

    /// Fills `min_cut` with the nodes still reachable from the source in the
    /// residual network. Used by the solvers whose final search state does not
    /// already encode reachability.
    pub(crate) fn min_cut_from_residual_reachability(&mut self) {
        self.min_cut.fill(false);
        self.min_cut[self.network.source()] = true;

        let mut queue = VecDeque::from([self.network.source()]);
        while let Some(u) = queue.pop_front() {
            for i in 0..self.network.adjacency[u].len() {
                let edge_id = self.network.adjacency[u][i];
                let edge = self.network.edge(edge_id);
                if edge.residual_capacity() > Flow::zero() && !self.min_cut[edge.to] {
                    self.min_cut[edge.to] = true;
                    queue.push_back(edge.to);
                }
            }
        }
    }
}

/// The solver contract every algorithm implements over a [`FlowNetwork`].
///
/// `solve` runs at most once per instance: the first getter call executes it
/// and caches the outcome, later calls replay the cached value (or the cached
/// error) without recomputation.
pub trait FlowSolver<Flow>
where
    Flow: FlowNum,
{
    fn core(&self) -> &SolverCore<Flow>;
    fn core_mut(&mut self) -> &mut SolverCore<Flow>;

    /// Runs the algorithm to completion. Invoked through the getters; do not
    /// call directly.
    fn solve(&mut self) -> Result<(), Error>;

    /// Maximum flow from source to sink.
    fn max_flow(&mut self) -> Result<Flow, Error> {
        self.execute()?;
        Ok(self.core().max_flow)
    }

    /// Total cost of the maximum flow. Zero for the max-flow-only algorithms.
    fn min_cost(&mut self) -> Result<Flow, Error> {
        self.execute()?;
        Ok(self.core().min_cost)
    }

    /// Minimum cut: `true` marks the nodes on the source side.
    fn min_cut<'a>(&'a mut self) -> Result<&'a [bool], Error>
    where
        Flow: 'a,
    {
        self.execute()?;
        Ok(&self.core().min_cut)
    }

    /// The network with its final per-edge flows, for inspection.
    fn graph<'a>(&'a mut self) -> Result<&'a FlowNetwork<Flow>, Error>
    where
        Flow: 'a,
    {
        self.execute()?;
        Ok(&self.core().network)
    }

    #[doc(hidden)]
    fn execute(&mut self) -> Result<(), Error> {
        if let Some(outcome) = &self.core().outcome {
            return outcome.clone();
        }
        let outcome = self.solve();
        self.core_mut().outcome = Some(outcome.clone());
        outcome
    }
}
