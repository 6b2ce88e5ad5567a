pub mod codes;
pub mod details;
