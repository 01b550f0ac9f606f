use configs::Environment;
use models::{Product, User};
use store::ResourceStore;

/// Everything handlers reach for, injected at router construction time.
///
/// The stores are plain values rather than process-wide globals, so each test
/// can hand the router a fresh pair and never see another test's data.
#[derive(Clone)]
pub struct AppState {
    pub users: ResourceStore<User>,
    pub products: ResourceStore<Product>,
    pub environment: Environment,
}

impl AppState {
    /// Empty stores; the usual starting point for the api binary and tests.
    pub fn new(environment: Environment) -> Self {
        Self {
            users: ResourceStore::new(),
            products: ResourceStore::new(),
            environment,
        }
    }
}
