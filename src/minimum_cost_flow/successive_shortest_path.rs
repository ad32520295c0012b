use crate::error::Error;
use crate::graph::{infinity, FlowNetwork, FlowNum};
use crate::solver::{FlowSolver, SolverCore};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-cost max-flow with Johnson's reweighting: one Bellman-Ford pass gives
/// node potentials, every residual edge cost is rewritten to its non-negative
/// reduced form, and the remaining augmenting paths come from Dijkstra with
/// the costs re-adjusted after each round. Cost accounting always uses the
/// insertion-time cost, so the reweighting never double-counts. O(E²V log V).
///
/// As with [`BellmanFord`](crate::minimum_cost_flow::bellman_ford::BellmanFord),
/// a negative-cost cycle reachable from the source is rejected with
/// [`Error::NegativeCycle`].
pub struct SuccessiveShortestPath<Flow> {
    core: SolverCore<Flow>,
    dist: Vec<Flow>,
    // prev[v] = arena index of the edge the search used to reach v
    prev: Vec<usize>,
    heap: BinaryHeap<(Reverse<Flow>, usize)>,
}

impl<Flow> SuccessiveShortestPath<Flow>
where
    Flow: FlowNum,
{
    pub fn new(network: FlowNetwork<Flow>) -> Self {
        let num_nodes = network.num_nodes();
        Self {
            core: SolverCore::new(network),
            dist: vec![Flow::zero(); num_nodes],
            prev: vec![usize::MAX; num_nodes],
            heap: BinaryHeap::new(),
        }
    }

    /// Bellman-Ford once from the source to seed the potentials, then fold
    /// them into the edge costs.
    fn init(&mut self) -> Result<(), Error> {
        let num_nodes = self.core.network.num_nodes();
        self.dist.fill(infinity());
        self.dist[self.core.network.source()] = Flow::zero();

        for _ in 0..num_nodes.saturating_sub(1) {
            if !self.relax_all()? {
                break;
            }
        }
        if self.relax_all()? {
            return Err(Error::NegativeCycle);
        }

        self.adjust_edge_costs();
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
                updated = true;
            }
        }
        Ok(updated)
    }

    /// Rewrites each residual edge cost to its reduced form
    /// `cost + dist[from] - dist[to]`, which is non-negative wherever the
    /// distances are tight. Saturated edges and edges at unreached nodes get
    /// cost zero; capacities and flows are left untouched.
    fn adjust_edge_costs(&mut self) {
        let inf = infinity::<Flow>();
        for edge_id in 0..self.core.network.edges.len() {
            let (from, to, residual_capacity) = {
                let edge = self.core.network.edge(edge_id);
                (edge.from, edge.to, edge.residual_capacity())
            };
            let edge = &mut self.core.network.edges[edge_id];
            if residual_capacity > Flow::zero() && self.dist[from] < inf && self.dist[to] < inf {
                edge.cost += self.dist[from] - self.dist[to];
            } else {
                edge.cost = Flow::zero();
            }
        }
    }

    /// Dijkstra over the reduced costs; returns whether the sink was reached.
    fn dijkstra(&mut self) -> Result<bool, Error> {
        let (source, sink) = (self.core.network.source(), self.core.network.sink());
        self.dist.fill(infinity());
        self.dist[source] = Flow::zero();
        self.prev.fill(usize::MAX);
        self.core.mark_all_unvisited();

        self.heap.clear();
        self.heap.push((Reverse(Flow::zero()), source));
        while let Some((Reverse(d), u)) = self.heap.pop() {
            if self.core.is_visited(u) {
                continue;
            }
            self.core.visit(u);

            for i in 0..self.core.network.adjacency[u].len() {
                let edge_id = self.core.network.adjacency[u][i];
                let edge = self.core.network.edge(edge_id);
                if edge.residual_capacity() <= Flow::zero() || self.core.is_visited(edge.to) {
                    continue;
                }

                let new_dist = d.checked_add(&edge.cost).ok_or(Error::Overflow)?;
                if new_dist < self.dist[edge.to] {
                    self.dist[edge.to] = new_dist;
                    self.prev[edge.to] = edge_id;
                    self.heap.push((Reverse(new_dist), edge.to));
                }
            }
        }

        Ok(self.dist[sink] < infinity())
    }
}

impl<Flow> FlowSolver<Flow> for SuccessiveShortestPath<Flow>
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
        self.init()?;

        while self.dijkstra()? {
            // fold the fresh distances into the costs before augmenting, so
            // the next round again sees non-negative reduced costs
            self.adjust_edge_costs();

            let mut bottleneck: Flow = infinity();
            let mut v = sink;
            while v != source {
                let edge = self.core.network.edge(self.prev[v]);
                bottleneck = bottleneck.min(edge.residual_capacity());
                v = edge.from;
            }

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

        log::debug!("successive shortest path done, flow {:?}, cost {:?}", self.core.max_flow, self.core.min_cost);
        Ok(())
    }
}
