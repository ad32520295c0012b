use network_flow::graph::FlowNetwork;
use network_flow::maximum_flow::capacity_scaling::CapacityScaling;
use network_flow::maximum_flow::dinic::Dinic;
use network_flow::maximum_flow::edmonds_karp::EdmondsKarp;
use network_flow::maximum_flow::ford_fulkerson::FordFulkerson;
use network_flow::minimum_cost_flow::bellman_ford::BellmanFord;
use network_flow::minimum_cost_flow::successive_shortest_path::SuccessiveShortestPath;
use network_flow::solver::FlowSolver;
use rstest::rstest;

type Edges = &'static [(usize, usize, i64)];

fn network(n: usize, source: usize, sink: usize, edges: &[(usize, usize, i64)]) -> FlowNetwork<i64> {
    let mut network = FlowNetwork::new(n, source, sink).unwrap();
    for &(from, to, capacity) in edges {
        network.add_edge(from, to, capacity).unwrap();
    }
    network
}

/// One instance of every solver over the same network, the cost variants
/// included (with zero costs they must agree on the flow value).
fn all_solvers(n: usize, source: usize, sink: usize, edges: &[(usize, usize, i64)]) -> Vec<(&'static str, Box<dyn FlowSolver<i64>>)> {
    vec![
        ("ford_fulkerson", Box::new(FordFulkerson::new(network(n, source, sink, edges)))),
        ("edmonds_karp", Box::new(EdmondsKarp::new(network(n, source, sink, edges)))),
        ("capacity_scaling", Box::new(CapacityScaling::new(network(n, source, sink, edges)))),
        ("dinic", Box::new(Dinic::new(network(n, source, sink, edges)))),
        ("bellman_ford", Box::new(BellmanFord::new(network(n, source, sink, edges)))),
        ("successive_shortest_path", Box::new(SuccessiveShortestPath::new(network(n, source, sink, edges)))),
    ]
}

// Graph from http://crypto.cs.mcgill.ca/~crepeau/COMP251/KeyNoteSlides/07demo-maxflowCS-C.pdf
const SMALL: Edges = &[
    (4, 0, 10),
    (4, 1, 10),
    (2, 5, 10),
    (3, 5, 10),
    (0, 1, 2),
    (0, 2, 4),
    (0, 3, 8),
    (1, 3, 9),
    (3, 2, 6),
];

const MEDIUM: Edges = &[
    (11, 0, 5),
    (11, 1, 20),
    (11, 2, 10),
    (0, 1, 3),
    (0, 5, 4),
    (1, 4, 14),
    (1, 5, 14),
    (2, 1, 5),
    (2, 3, 4),
    (3, 4, 3),
    (3, 9, 11),
    (4, 6, 4),
    (4, 8, 22),
    (5, 6, 8),
    (5, 7, 3),
    (6, 7, 12),
    (7, 8, 9),
    (7, 10, 7),
    (8, 9, 11),
    (8, 10, 15),
    (9, 10, 60),
];

#[rstest]
#[case::line_graph(4, 3, 2, &[(3, 0, 5), (0, 1, 3), (1, 2, 7)], 3)]
#[case::disconnected(4, 3, 2, &[(3, 0, 9), (1, 2, 9)], 0)]
#[case::small(6, 4, 5, SMALL, 19)]
#[case::classic(4, 3, 2, &[(3, 0, 10000), (3, 1, 10000), (0, 2, 10000), (1, 2, 10000), (0, 1, 1)], 20000)]
#[case::medium(12, 11, 10, MEDIUM, 29)]
fn every_algorithm_agrees_on_the_flow_value(
    #[case] n: usize,
    #[case] source: usize,
    #[case] sink: usize,
    #[case] edges: Edges,
    #[case] expected: i64,
) {
    for (name, mut solver) in all_solvers(n, source, sink, edges) {
        assert_eq!(solver.max_flow(), Ok(expected), "{name}");
    }
}

// A long chain fanning out into unit edges: augmenting paths have ~250 nodes,
// exercising the recursive searches near their depth bound.
#[test]
fn evil_chain_network() {
    let k = 250;
    let n = 2 * k + 1;
    let (source, sink) = (0, 2 * k);

    let mut edges = Vec::new();
    for i in 0..k - 1 {
        edges.push((i, i + 1, k as i64));
    }
    for i in 0..k {
        edges.push((k - 1, k + i, 1));
        edges.push((k + i, sink, 1));
    }

    for (name, mut solver) in all_solvers(n, source, sink, &edges) {
        assert_eq!(solver.max_flow(), Ok(k as i64), "{name}");
    }
}

#[rstest]
#[case::small(6, 4, 5, SMALL)]
#[case::medium(12, 11, 10, MEDIUM)]
fn flow_is_conserved_at_interior_nodes(#[case] n: usize, #[case] source: usize, #[case] sink: usize, #[case] edges: Edges) {
    for (name, mut solver) in all_solvers(n, source, sink, edges) {
        let graph = solver.graph().unwrap();
        for u in 0..n {
            if u == source || u == sink {
                continue;
            }
            let incoming: i64 = graph.forward_edges().filter(|e| e.to == u).map(|e| e.flow).sum();
            let outgoing: i64 = graph.forward_edges().filter(|e| e.from == u).map(|e| e.flow).sum();
            assert_eq!(incoming, outgoing, "{name}, node {u}");
        }
    }
}

#[rstest]
#[case::small(6, 4, 5, SMALL)]
#[case::medium(12, 11, 10, MEDIUM)]
fn flows_respect_capacities_and_residual_symmetry(
    #[case] n: usize,
    #[case] source: usize,
    #[case] sink: usize,
    #[case] edges: Edges,
) {
    for (name, mut solver) in all_solvers(n, source, sink, edges) {
        let graph = solver.graph().unwrap();
        for edge_id in graph.forward_edge_ids() {
            let edge = graph.edge(edge_id);
            assert!(edge.flow >= 0 && edge.flow <= edge.capacity, "{name}, edge {edge_id}");
            assert_eq!(edge.flow, -graph.residual_of(edge_id).flow, "{name}, edge {edge_id}");
        }
    }
}

#[rstest]
#[case::line_graph(4, 3, 2, &[(3, 0, 5), (0, 1, 3), (1, 2, 7)])]
#[case::small(6, 4, 5, SMALL)]
#[case::medium(12, 11, 10, MEDIUM)]
fn cut_capacity_equals_max_flow(#[case] n: usize, #[case] source: usize, #[case] sink: usize, #[case] edges: Edges) {
    for (name, mut solver) in all_solvers(n, source, sink, edges) {
        let max_flow = solver.max_flow().unwrap();
        let min_cut = solver.min_cut().unwrap().to_vec();
        assert!(min_cut[source] && !min_cut[sink], "{name}");

        let crossing: i64 = solver
            .graph()
            .unwrap()
            .forward_edges()
            .filter(|e| min_cut[e.from] && !min_cut[e.to])
            .map(|e| e.capacity)
            .sum();
        assert_eq!(crossing, max_flow, "{name}");
    }
}

#[test]
fn getters_are_idempotent() {
    for (name, mut solver) in all_solvers(6, 4, 5, SMALL) {
        let first = solver.max_flow().unwrap();
        assert_eq!(solver.max_flow(), Ok(first), "{name}");
        let first_cut = solver.min_cut().unwrap().to_vec();
        let second_cut = solver.min_cut().unwrap().to_vec();
        assert_eq!(first_cut, second_cut, "{name}");
        // the flows must not move between getter calls
        let flows: Vec<i64> = solver.graph().unwrap().forward_edges().map(|e| e.flow).collect();
        let _ = solver.max_flow().unwrap();
        let again: Vec<i64> = solver.graph().unwrap().forward_edges().map(|e| e.flow).collect();
        assert_eq!(flows, again, "{name}");
    }
}
