pub mod models;
pub mod persistence;
pub mod security;

pub use persistence::UserRepositoryImpl;
pub use security::token::TokenService;
