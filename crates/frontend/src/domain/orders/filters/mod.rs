//! Order filters: committed state, its URL form, and the form that edits it.

pub mod form;
pub mod state;
pub mod url_sync;

pub use form::{FilterField, FormState, OrderFilterController};
pub use state::FilterState;
pub use url_sync::UrlSynchronizer;
