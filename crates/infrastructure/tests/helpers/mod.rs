mod store_server;

pub use store_server::*;
