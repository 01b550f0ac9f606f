pub mod errors;
pub mod resource;

pub use errors::StoreError;
pub use resource::ResourceStore;
