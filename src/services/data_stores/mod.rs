mod file_key_value_store;
mod hashmap_key_value_store;
mod redis_key_value_store;

pub use file_key_value_store::*;
pub use hashmap_key_value_store::*;
pub use redis_key_value_store::*;
