//! Business logic services over the repositories.

pub mod products;
pub mod uploads;
pub mod users;

pub use products::{ProductService, ProductServiceError, Totals};
pub use users::{ProfileUpload, UserService, UserServiceError};
