pub mod entities;
pub mod repositories;
#[cfg(test)]
pub mod test_support;
pub mod value_objects;

pub use entities::user::{ProfileChanges, User};
pub use repositories::user_repository::UserRepository;
pub use value_objects::user_role::UserRole;
