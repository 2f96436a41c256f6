// Core modules shared by the api layer.
pub mod error;
