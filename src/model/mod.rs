pub mod benchmark;
pub mod chart;
pub mod configs;
