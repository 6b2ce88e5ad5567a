pub mod byte_order;
pub mod pair;
