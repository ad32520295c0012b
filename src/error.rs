use displaydoc::Display;

/// Errors raised while building or solving a flow network.
///
/// Construction errors surface at the call site; solving errors are produced
/// by the first getter that triggers the solve and replayed by every later
/// getter on the same instance.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// a flow network needs at least two nodes, got {0}
    TooFewNodes(usize),
    /// source and sink must be different nodes (both are {0})
    SourceEqualsSink(usize),
    /// node {node} is out of range for a network with {num_nodes} nodes
    NodeOutOfRange { node: usize, num_nodes: usize },
    /// edge capacity must be non-negative
    NegativeCapacity,
    /// negative-cost cycle reachable from the source
    NegativeCycle,
    /// arithmetic overflow while accumulating flow, cost or distance
    Overflow,
}

impl std::error::Error for Error {}
