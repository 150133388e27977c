pub mod common;
pub mod config;
pub mod doctor;
pub mod error;
pub mod models;
pub mod patient;
pub mod requests;

pub use common::*;
pub use config::*;
pub use doctor::*;
pub use error::*;
pub use models::*;
pub use patient::*;
pub use requests::*;
