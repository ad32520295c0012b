use crate::error::Error;
use crate::graph::{FlowNetwork, FlowNum};
use crate::solver::{FlowSolver, SolverCore};
use std::collections::VecDeque;

/// Edmonds-Karp: the Ford-Fulkerson method with a breadth-first search, so
/// every augmenting path is a fewest-edge path in the residual network.
/// O(VE²).
pub struct EdmondsKarp<Flow> {
    core: SolverCore<Flow>,
    // prev[v] = arena index of the edge the BFS used to reach v
    prev: Vec<usize>,
    que: VecDeque<usize>,
}

impl<Flow> EdmondsKarp<Flow>
where
    Flow: FlowNum,
{
    pub fn new(network: FlowNetwork<Flow>) -> Self {
        let num_nodes = network.num_nodes();
        Self { core: SolverCore::new(network), prev: vec![usize::MAX; num_nodes], que: VecDeque::new() }
    }

    /// One BFS pass over the residual network; fills `prev` for path
    /// reconstruction and returns whether the sink was reached.
    fn bfs(&mut self) -> bool {
        let (source, sink) = (self.core.network.source(), self.core.network.sink());
        self.prev.fill(usize::MAX);
        self.core.mark_all_unvisited();
        self.core.visit(source);

        self.que.clear();
        self.que.push_back(source);
        while let Some(u) = self.que.pop_front() {
            if u == sink {
                break;
            }

            for i in 0..self.core.network.adjacency[u].len() {
                let edge_id = self.core.network.adjacency[u][i];
                let edge = self.core.network.edge(edge_id);
                let (to, residual_capacity) = (edge.to, edge.residual_capacity());
                if residual_capacity <= Flow::zero() || self.core.is_visited(to) {
                    continue;
                }

                self.core.visit(to);
                self.prev[to] = edge_id;
                self.que.push_back(to);
            }
        }

        self.core.is_visited(sink)
    }
}

impl<Flow> FlowSolver<Flow> for EdmondsKarp<Flow>
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

        while self.bfs() {
            // bottleneck along the reconstructed path
            let mut bottleneck = self.core.network.edge(self.prev[sink]).residual_capacity();
            let mut v = sink;
            while v != source {
                let edge = self.core.network.edge(self.prev[v]);
                bottleneck = bottleneck.min(edge.residual_capacity());
                v = edge.from;
            }

            let mut v = sink;
            while v != source {
                let edge_id = self.prev[v];
                v = self.core.network.edge(edge_id).from;
                self.core.network.augment(edge_id, bottleneck);
            }

            self.core.add_flow(bottleneck)?;
            log::trace!("augmented by {:?}, total flow {:?}", bottleneck, self.core.max_flow);
        }

        // the failed final BFS marked the residual-reachable nodes
        for u in 0..self.core.network.num_nodes() {
            let reachable = self.core.is_visited(u);
            self.core.min_cut[u] = reachable;
        }

        log::debug!("edmonds-karp done, maximum flow {:?}", self.core.max_flow);
        Ok(())
    }
}
