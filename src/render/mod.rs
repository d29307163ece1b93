pub mod contributors;
pub mod format;
pub mod repo;
pub mod repo_list;
pub mod user;

pub use contributors::render_ranking;
pub use repo::render_repo;
pub use repo_list::render_repo_list;
pub use user::render_user;
