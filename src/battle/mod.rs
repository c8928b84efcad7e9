pub mod catch;
pub mod context;
pub mod engine;
pub mod rng;
pub mod runner;
pub mod state;

#[cfg(test)]
pub(crate) mod tests;
