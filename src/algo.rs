pub mod reach;
pub mod scc;

pub use reach::Reachable;
pub use scc::StronglyConnectedComponents;
