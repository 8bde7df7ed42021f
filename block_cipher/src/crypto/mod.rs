pub mod cipher_traits;
pub mod ctr;
pub mod des;
pub mod des_key_schedule;
pub mod des_tables;
pub mod errors;
pub mod triple_des;
pub mod utils;
