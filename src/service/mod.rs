pub mod accounts;
pub mod password;

pub use accounts::{SignupRequest, signin, signup};
