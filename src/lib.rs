pub mod aggregator;
pub mod cli;
pub mod comment;
pub mod config;
pub mod filter;
pub mod model;
pub mod runner;
pub mod slack;
pub mod trello;
