mod mock_stores;

pub use mock_stores::*;
