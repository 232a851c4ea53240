pub mod api;
pub mod sign_in;
