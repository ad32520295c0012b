use network_flow::error::Error;
use network_flow::graph::FlowNetwork;
use network_flow::maximum_flow::dinic::Dinic;
use network_flow::solver::FlowSolver;

fn main() -> Result<(), Error> {
    let n = 6;
    let (source, sink) = (n - 2, n - 1);
    let mut network = FlowNetwork::<i64>::new(n, source, sink)?;

    network.add_edge(source, 0, 10)?;
    network.add_edge(source, 1, 10)?;
    network.add_edge(2, sink, 10)?;
    network.add_edge(3, sink, 10)?;
    network.add_edge(0, 1, 2)?;
    network.add_edge(0, 2, 4)?;
    network.add_edge(0, 3, 8)?;
    network.add_edge(1, 3, 9)?;
    network.add_edge(3, 2, 6)?;

    let mut solver = Dinic::new(network);
    println!("maximum flow: {}", solver.max_flow()?);
    println!("source side of the minimum cut: {:?}", solver.min_cut()?);
    for edge in solver.graph()?.forward_edges() {
        println!("{} -> {} | flow = {} / {}", edge.from, edge.to, edge.flow, edge.capacity);
    }

    Ok(())
}
