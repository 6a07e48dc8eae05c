pub mod sorteo_service;

pub use sorteo_service::*;
