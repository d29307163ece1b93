pub mod contributors;
pub mod repo;
pub mod user;

pub use contributors::*;
pub use repo::*;
pub use user::*;
