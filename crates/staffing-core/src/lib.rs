pub mod action;
pub mod agency;
pub mod authz;
pub mod error;
pub mod io;
pub mod paths;
pub mod reason;
pub mod request;
pub mod search;
pub mod types;

pub use error::{Result, StaffingError};
