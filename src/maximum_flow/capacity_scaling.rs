use crate::error::Error;
use crate::graph::{infinity, FlowNetwork, FlowNum};
use crate::solver::{FlowSolver, SolverCore};

/// Capacity scaling: the DFS augmenting-path search restricted to edges with
/// residual capacity at least `delta`, a power of two halved each round.
/// Early rounds pick up the large augmenting paths cheaply; O(E² log U) where
/// U is the maximum capacity.
pub struct CapacityScaling<Flow> {
    core: SolverCore<Flow>,
    delta: Flow,
}

impl<Flow> CapacityScaling<Flow>
where
    Flow: FlowNum,
{
    pub fn new(network: FlowNetwork<Flow>) -> Self {
        Self { core: SolverCore::new(network), delta: Flow::zero() }
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
            if residual_capacity < self.delta || self.core.is_visited(to) {
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

impl<Flow> FlowSolver<Flow> for CapacityScaling<Flow>
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
        let two = Flow::one() + Flow::one();

        // largest power of two not exceeding the maximum edge capacity
        let max_capacity = self.core.network.max_capacity();
        if max_capacity > Flow::zero() {
            self.delta = Flow::one();
            while self.delta <= max_capacity / two {
                self.delta = self.delta * two;
            }
        }

        while self.delta > Flow::zero() {
            log::trace!("scaling round, delta {:?}", self.delta);
            loop {
                self.core.mark_all_unvisited();
                let bottleneck = self.dfs(source, infinity());
                if bottleneck == Flow::zero() {
                    break;
                }
                self.core.add_flow(bottleneck)?;
            }
            self.delta = self.delta / two;
        }

        self.core.min_cut_from_residual_reachability();

        log::debug!("capacity scaling done, maximum flow {:?}", self.core.max_flow);
        Ok(())
    }
}
