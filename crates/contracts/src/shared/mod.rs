pub mod validation;
pub mod wire;
