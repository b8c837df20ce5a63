pub mod application;
pub mod legacy;
pub mod validate;
