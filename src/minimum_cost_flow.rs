pub mod bellman_ford;
pub mod successive_shortest_path;
