pub mod iter_utils;
pub mod map;
