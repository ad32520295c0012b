use crate::error::Error;
use crate::graph::{infinity, FlowNetwork, FlowNum};
use crate::solver::{FlowSolver, SolverCore};

/// Min-cost max-flow with Bellman-Ford as the augmenting-path oracle, so
/// negative edge costs are supported directly. Each round relaxes every
/// residual edge for V-1 passes and pushes the bottleneck along the cheapest
/// source-sink path. O(E²V²).
///
/// A negative-cost cycle reachable from the source is rejected with
/// [`Error::NegativeCycle`] instead of silently producing a wrong cost.
pub struct BellmanFord<Flow> {
    core: SolverCore<Flow>,
    dist: Vec<Flow>,
    // prev[v] = arena index of the relaxed edge into v
    prev: Vec<usize>,
}

impl<Flow> BellmanFord<Flow>
where
    Flow: FlowNum,
{
    pub fn new(network: FlowNetwork<Flow>) -> Self {
        let num_nodes = network.num_nodes();
        Self { core: SolverCore::new(network), dist: vec![Flow::zero(); num_nodes], prev: vec![usize::MAX; num_nodes] }
    }

    /// Single-source shortest path by cost over positive-residual edges.
    fn bellman_ford(&mut self) -> Result<(), Error> {
        let num_nodes = self.core.network.num_nodes();
        self.dist.fill(infinity());
        self.dist[self.core.network.source()] = Flow::zero();
        self.prev.fill(usize::MAX);

        for _ in 0..num_nodes.saturating_sub(1) {
            if !self.relax_all()? {
                break;
            }
        }

        // one extra pass still improving a distance means a negative cycle
        if self.relax_all()? {
            return Err(Error::NegativeCycle);
        }
        Ok(())
    }

    fn relax_all(&mut self) -> Result<bool, Error> {
        let mut updated = false;
        for edge_id in 0..self.core.network.edges.len() {
            let edge = self.core.network.edge(edge_id);
            if edge.residual_capacity() <= Flow::zero() || self.dist[edge.from] >= infinity() {
                continue;
            }

            let new_dist = self.dist[edge.from].checked_add(&edge.cost).ok_or(Error::Overflow)?;
            if new_dist < self.dist[edge.to] {
                self.dist[edge.to] = new_dist;
                self.prev[edge.to] = edge_id;
                updated = true;
            }
        }
        Ok(updated)
    }
}

impl<Flow> FlowSolver<Flow> for BellmanFord<Flow>
where
    Flow: FlowNum,
{
    fn core(&self) -> &SolverCore<Flow> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SolverCore<Flow> {
        &mut self.core
    }

    fn solve(&mut self) -> Result<(), Error> {
        let (source, sink) = (self.core.network.source(), self.core.network.sink());

        loop {
            self.bellman_ford()?;
            if self.prev[sink] == usize::MAX {
                break;
            }

            // bottleneck along the cheapest path
            let mut bottleneck: Flow = infinity();
            let mut v = sink;
            while v != source {
                let edge = self.core.network.edge(self.prev[v]);
                bottleneck = bottleneck.min(edge.residual_capacity());
                v = edge.from;
            }

            // retrace while augmenting; cost accounting uses the insertion
            // cost so residual traversals refund what they undo
            let mut v = sink;
            while v != source {
                let edge_id = self.prev[v];
                let (from, original_cost) = {
                    let edge = self.core.network.edge(edge_id);
                    (edge.from, edge.original_cost)
                };
                self.core.network.augment(edge_id, bottleneck);
                self.core.add_cost(bottleneck, original_cost)?;
                v = from;
            }

            self.core.add_flow(bottleneck)?;
            log::trace!("augmented by {:?}, flow {:?}, cost {:?}", bottleneck, self.core.max_flow, self.core.min_cost);
        }

        self.core.min_cut_from_residual_reachability();

        log::debug!("bellman-ford mcmf done, flow {:?}, cost {:?}", self.core.max_flow, self.core.min_cost);
        Ok(())
    }
}
