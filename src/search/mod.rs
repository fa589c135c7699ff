mod finder;
mod route;
mod tree;

pub use finder::{DEFAULT_MAX_FLIGHTS, RouteFinder};
pub use route::Route;
pub use tree::{NodeId, SearchTree};

#[cfg(test)]
mod tests;
