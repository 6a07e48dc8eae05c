pub mod sorteo;

pub use sorteo::*;
