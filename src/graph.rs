use crate::error::Error;
use num_traits::{NumAssign, PrimInt, Signed};
use std::fmt::Debug;

/// Integer flow amount. Signed so that residual flows can go negative, with
/// checked arithmetic available through `PrimInt`.
pub trait FlowNum: PrimInt + Signed + NumAssign + Debug {}
impl<T: PrimInt + Signed + NumAssign + Debug> FlowNum for T {}

// Distance sentinel kept well below the integer maximum so that a relaxation
// sum cannot wrap before the checked arithmetic catches it.
pub(crate) fn infinity<Flow: FlowNum>() -> Flow {
    Flow::max_value() / (Flow::one() + Flow::one())
}

/// A directed arc of the residual network.
///
/// Edges live in an arena owned by [`FlowNetwork`] and reference their paired
/// residual edge by arena index (`rev`) instead of by pointer. A forward edge
/// sits at an even index with its zero-capacity residual at the next odd one.
#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub capacity: Flow,
    /// Working cost; the Johnson's solver rewrites this in place.
    pub cost: Flow,
    /// Cost at insertion time, used for the final cost accounting.
    pub original_cost: Flow,
    pub(crate) rev: usize,
}

impl<Flow> Edge<Flow>
where
    Flow: FlowNum,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.capacity - self.flow
    }

    /// Arena index of the paired residual edge.
    #[inline]
    pub fn rev(&self) -> usize {
        self.rev
    }
}

/// An adjacency-list flow network with designated source and sink nodes.
///
/// The network owns every edge; insertion always creates a linked
/// forward/residual pair and nothing is ever removed. Populate it with
/// [`add_edge`](FlowNetwork::add_edge) /
/// [`add_edge_with_cost`](FlowNetwork::add_edge_with_cost), then hand it to
/// exactly one solver.
pub struct FlowNetwork<Flow> {
    num_nodes: usize,
    source: usize,
    sink: usize,
    pub(crate) edges: Vec<Edge<Flow>>,
    pub(crate) adjacency: Vec<Vec<usize>>,
}

impl<Flow> FlowNetwork<Flow>
where
    Flow: FlowNum,
{
    pub fn new(num_nodes: usize, source: usize, sink: usize) -> Result<Self, Error> {
        if num_nodes < 2 {
            return Err(Error::TooFewNodes(num_nodes));
        }
        for node in [source, sink] {
            if node >= num_nodes {
                return Err(Error::NodeOutOfRange { node, num_nodes });
            }
        }
        if source == sink {
            return Err(Error::SourceEqualsSink(source));
        }

        Ok(Self { num_nodes, source, sink, edges: Vec::new(), adjacency: vec![Vec::new(); num_nodes] })
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of inserted edges (residual counterparts not counted).
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len() / 2
    }

    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    #[inline]
    pub fn sink(&self) -> usize {
        self.sink
    }

    /// Adds a directed edge and its zero-capacity residual counterpart.
    /// Returns the arena index of the forward edge.
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: Flow) -> Result<usize, Error> {
        self.add_edge_with_cost(from, to, capacity, Flow::zero())
    }

    /// Cost variant of [`add_edge`](FlowNetwork::add_edge) for the min-cost
    /// solvers; the residual counterpart gets the negated cost.
    pub fn add_edge_with_cost(&mut self, from: usize, to: usize, capacity: Flow, cost: Flow) -> Result<usize, Error> {
        for node in [from, to] {
            if node >= self.num_nodes {
                return Err(Error::NodeOutOfRange { node, num_nodes: self.num_nodes });
            }
        }
        if capacity < Flow::zero() {
            return Err(Error::NegativeCapacity);
        }

        let forward = self.edges.len();
        let backward = forward + 1;
        self.edges.push(Edge { from, to, flow: Flow::zero(), capacity, cost, original_cost: cost, rev: backward });
        self.edges
            .push(Edge { from: to, to: from, flow: Flow::zero(), capacity: Flow::zero(), cost: -cost, original_cost: -cost, rev: forward });
        self.adjacency[from].push(forward);
        self.adjacency[to].push(backward);

        Ok(forward)
    }

    #[inline]
    pub fn edge(&self, edge_id: usize) -> &Edge<Flow> {
        &self.edges[edge_id]
    }

    /// The residual counterpart of `edge_id`.
    #[inline]
    pub fn residual_of(&self, edge_id: usize) -> &Edge<Flow> {
        &self.edges[self.edges[edge_id].rev]
    }

    /// Arena indices of the edges leaving `u`, residual edges included.
    #[inline]
    pub fn adjacent(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    /// Edges leaving `u`, residual edges included.
    #[inline]
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = &Edge<Flow>> {
        self.adjacency[u].iter().map(|&edge_id| &self.edges[edge_id])
    }

    /// Arena indices of the forward (inserted) edges.
    #[inline]
    pub fn forward_edge_ids(&self) -> impl Iterator<Item = usize> {
        (0..self.edges.len()).step_by(2)
    }

    /// The forward (inserted) edges, in insertion order.
    pub fn forward_edges(&self) -> impl Iterator<Item = &Edge<Flow>> {
        self.edges.iter().step_by(2)
    }

    /// Largest capacity over all edges, zero for an edgeless network.
    pub(crate) fn max_capacity(&self) -> Flow {
        self.forward_edges().map(|e| e.capacity).max().unwrap_or_else(Flow::zero)
    }

    /// The only flow mutation point: pushes `delta` along `edge_id` and pulls
    /// it back along the paired residual edge.
    #[inline]
    pub(crate) fn augment(&mut self, edge_id: usize, delta: Flow) {
        let rev = self.edges[edge_id].rev;
        self.edges[edge_id].flow += delta;
        self.edges[rev].flow -= delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn construction_rejects_bad_arguments() {
        assert_eq!(FlowNetwork::<i64>::new(1, 0, 0).err(), Some(Error::TooFewNodes(1)));
        assert_eq!(FlowNetwork::<i64>::new(4, 2, 2).err(), Some(Error::SourceEqualsSink(2)));
        assert_eq!(FlowNetwork::<i64>::new(4, 0, 7).err(), Some(Error::NodeOutOfRange { node: 7, num_nodes: 4 }));
    }

    #[test]
    fn add_edge_rejects_bad_arguments() {
        let mut network = FlowNetwork::<i64>::new(3, 0, 2).unwrap();
        assert_eq!(network.add_edge(0, 5, 1).err(), Some(Error::NodeOutOfRange { node: 5, num_nodes: 3 }));
        assert_eq!(network.add_edge(0, 1, -1).err(), Some(Error::NegativeCapacity));
        assert_eq!(network.num_edges(), 0);
    }

    #[test]
    fn edges_are_inserted_as_linked_pairs() {
        let mut network = FlowNetwork::<i64>::new(3, 0, 2).unwrap();
        let e = network.add_edge_with_cost(0, 1, 10, 3).unwrap();

        let forward = network.edge(e);
        let backward = network.residual_of(e);
        assert_eq!((forward.from, forward.to, forward.capacity, forward.cost), (0, 1, 10, 3));
        assert_eq!((backward.from, backward.to, backward.capacity, backward.cost), (1, 0, 0, -3));
        assert_eq!(network.edges[backward.rev], *forward);
        assert_eq!(network.adjacent(0), &[e]);
        assert_eq!(network.adjacent(1), &[e + 1]);
    }

    #[test]
    fn augment_applies_to_both_sides() {
        let mut network = FlowNetwork::<i64>::new(3, 0, 2).unwrap();
        let e = network.add_edge(0, 1, 10).unwrap();

        network.augment(e, 4);
        assert_eq!(network.edge(e).flow, 4);
        assert_eq!(network.edge(e).residual_capacity(), 6);
        assert_eq!(network.residual_of(e).flow, -4);
        assert_eq!(network.residual_of(e).residual_capacity(), 4);

        // pushing along the residual side undoes flow on the forward side
        network.augment(network.edge(e).rev(), 3);
        assert_eq!(network.edge(e).flow, 1);
    }
}
