//! Client-side contract for the text fingerprint service.
//!
//! Request assembly, multipart form fields, boundary decoding of the two JSON
//! endpoints into typed results, and the presentation rules shared by the web
//! UI and the command-line client. No hashing happens here: the service owns
//! the algorithm, this crate only speaks its wire format.

pub mod config;
pub mod error;
pub mod experiment;
pub mod params;
pub mod phase;
pub mod request;
pub mod response;
pub mod view;
