pub mod layer;
pub mod store;
