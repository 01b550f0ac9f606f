use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Payload of the welcome route: a greeting plus where the collections live.
#[derive(Serialize, Debug)]
pub struct ApiIndex {
    pub message: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Serialize, Debug)]
pub struct Endpoints {
    pub users: &'static str,
    pub products: &'static str,
}

impl ApiIndex {
    pub fn new(message: &'static str) -> Self {
        Self {
            message,
            endpoints: Endpoints { users: "/api/users", products: "/api/products" },
        }
    }
}
