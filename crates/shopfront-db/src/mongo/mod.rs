//! MongoDB implementations of the repository traits.

mod categories;
mod products;
mod users;

pub use categories::MongoCategoryRepository;
pub use products::MongoProductRepository;
pub use users::MongoUserRepository;
