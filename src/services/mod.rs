// Service exports
pub mod data;
pub mod investors;
pub mod network;
pub mod seed;

pub use data::DataError;
pub use investors::InvestorStore;
pub use network::{NetworkData, SocialGraph, SocialGraphBuilder};
