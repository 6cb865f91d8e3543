pub mod client;
pub mod message;
pub mod product_rpc;
