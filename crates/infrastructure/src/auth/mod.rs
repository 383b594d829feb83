//! Authentication adapters.

mod reqwest_service;

pub use reqwest_service::ReqwestAuthService;
