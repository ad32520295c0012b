use crate::error::Error;
use crate::graph::{infinity, FlowNetwork, FlowNum};
use crate::solver::{FlowSolver, SolverCore};
use std::collections::VecDeque;

const UNREACHED: usize = usize::MAX;

/// Dinic's algorithm: build a level graph with a BFS from the source, then
/// saturate every shortest augmenting path with DFS passes that advance one
/// level per edge. Each node keeps a next-edge pointer so edges proven
/// useless within a phase are never re-examined (Even-Itai). O(V²E).
pub struct Dinic<Flow> {
    core: SolverCore<Flow>,
    level: Vec<usize>,
    next_edge: Vec<usize>,
    que: VecDeque<usize>,
}

impl<Flow> Dinic<Flow>
where
    Flow: FlowNum,
{
    pub fn new(network: FlowNetwork<Flow>) -> Self {
        let num_nodes = network.num_nodes();
        Self {
            core: SolverCore::new(network),
            level: vec![UNREACHED; num_nodes],
            next_edge: vec![0; num_nodes],
            que: VecDeque::new(),
        }
    }

    /// Assigns BFS distances from the source over positive-residual edges;
    /// returns whether the sink was reached.
    fn bfs(&mut self) -> bool {
        let (source, sink) = (self.core.network.source(), self.core.network.sink());
        self.level.fill(UNREACHED);
        self.level[source] = 0;

        self.que.clear();
        self.que.push_back(source);
        while let Some(u) = self.que.pop_front() {
            for i in 0..self.core.network.adjacency[u].len() {
                let edge = self.core.network.edge(self.core.network.adjacency[u][i]);
                if edge.residual_capacity() > Flow::zero() && self.level[edge.to] == UNREACHED {
                    self.level[edge.to] = self.level[u] + 1;
                    self.que.push_back(edge.to);
                }
            }
        }

        self.level[sink] != UNREACHED
    }

    fn dfs(&mut self, u: usize, pushed: Flow) -> Flow {
        if u == self.core.network.sink() {
            return pushed;
        }

        while self.next_edge[u] < self.core.network.adjacency[u].len() {
            let edge_id = self.core.network.adjacency[u][self.next_edge[u]];
            let edge = self.core.network.edge(edge_id);
            let (to, residual_capacity) = (edge.to, edge.residual_capacity());

            if residual_capacity > Flow::zero() && self.level[to] == self.level[u] + 1 {
                let bottleneck = self.dfs(to, pushed.min(residual_capacity));
                if bottleneck > Flow::zero() {
                    self.core.network.augment(edge_id, bottleneck);
                    return bottleneck;
                }
            }
            self.next_edge[u] += 1;
        }

        Flow::zero()
    }
}

impl<Flow> FlowSolver<Flow> for Dinic<Flow>
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

        while self.bfs() {
            log::trace!("level graph rebuilt, sink level {:?}", self.level[self.core.network.sink()]);
            self.next_edge.fill(0);
            loop {
                let bottleneck = self.dfs(source, infinity());
                if bottleneck == Flow::zero() {
                    break;
                }
                self.core.add_flow(bottleneck)?;
            }
        }

        // nodes the failed final BFS could still level are the source side
        for u in 0..self.core.network.num_nodes() {
            self.core.min_cut[u] = self.level[u] != UNREACHED;
        }

        log::debug!("dinic done, maximum flow {:?}", self.core.max_flow);
        Ok(())
    }
}
