use crate::error::Error;
use crate::graph::{infinity, FlowNetwork, FlowNum};
use crate::solver::{FlowSolver, SolverCore};

/// Ford-Fulkerson method with a depth-first search as the means of finding
/// augmenting paths. O(fE) where f is the maximum flow value.
pub struct FordFulkerson<Flow> {
    core: SolverCore<Flow>,
}

impl<Flow> FordFulkerson<Flow>
where
    Flow: FlowNum,
{
    /// DFS recursion depth is bounded by the augmenting-path length, which is
    /// at most the number of nodes.
    pub fn new(network: FlowNetwork<Flow>) -> Self {
        Self { core: SolverCore::new(network) }
    }

    fn dfs(&mut self, u: usize, pushed: Flow) -> Flow {
        if u == self.core.network.sink() {
            return pushed;
        }
        self.core.visit(u);

        for i in 0..self.core.network.adjacency[u].len() {
            let edge_id = self.core.network.adjacency[u][i];
            let edge = self.core.network.edge(edge_id);
            let (to, residual_capacity) = (edge.to, edge.residual_capacity());
            if residual_capacity <= Flow::zero() || self.core.is_visited(to) {
                continue;
            }

            let bottleneck = self.dfs(to, pushed.min(residual_capacity));
            if bottleneck > Flow::zero() {
                self.core.network.augment(edge_id, bottleneck);
                return bottleneck;
            }
        }

        Flow::zero()
    }
}

impl<Flow> FlowSolver<Flow> for FordFulkerson<Flow>
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
        let source = self.core.network.source();

        loop {
            self.core.mark_all_unvisited();
            let bottleneck = self.dfs(source, infinity());
            if bottleneck == Flow::zero() {
                break;
            }
            self.core.add_flow(bottleneck)?;
            log::trace!("augmented by {:?}, total flow {:?}", bottleneck, self.core.max_flow);
        }

        // the failed final search marked exactly the nodes still reachable
        // from the source, which is the source side of the minimum cut
        for u in 0..self.core.network.num_nodes() {
            let reachable = self.core.is_visited(u);
            self.core.min_cut[u] = reachable;
        }

        log::debug!("ford-fulkerson done, maximum flow {:?}", self.core.max_flow);
        Ok(())
    }
}
