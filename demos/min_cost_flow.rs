use network_flow::error::Error;
use network_flow::graph::FlowNetwork;
use network_flow::minimum_cost_flow::successive_shortest_path::SuccessiveShortestPath;
use network_flow::solver::FlowSolver;

fn main() -> Result<(), Error> {
    let n = 6;
    let (source, sink) = (n - 1, n - 2);
    let mut network = FlowNetwork::<i64>::new(n, source, sink)?;

    network.add_edge_with_cost(source, 1, 4, 10)?;
    network.add_edge_with_cost(source, 2, 2, 30)?;
    network.add_edge_with_cost(1, 2, 2, 10)?;
    network.add_edge_with_cost(1, sink, 0, 9999)?;
    network.add_edge_with_cost(2, sink, 4, 10)?;

    let mut solver = SuccessiveShortestPath::new(network);
    println!("maximum flow: {}", solver.max_flow()?);
    println!("minimum cost: {}", solver.min_cost()?);

    Ok(())
}
