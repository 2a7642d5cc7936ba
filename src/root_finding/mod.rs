// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod trace;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod newton;
pub mod secant;
