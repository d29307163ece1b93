pub mod input;
pub mod session;
pub mod state;

pub use input::SearchInput;
pub use session::{surface_error, Session};
pub use state::{LookupKind, LookupOutcome, RequestToken, ViewMode, ViewState};
