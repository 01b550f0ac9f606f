pub mod entity;
pub mod product;
pub mod user;

pub use entity::Entity;
pub use product::{NewProduct, Product, ProductPatch};
pub use user::{NewUser, User, UserPatch};
