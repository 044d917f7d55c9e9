pub mod dependencies;
pub mod graph;
pub mod list;
