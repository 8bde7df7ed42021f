pub mod gf;
pub mod rijndael;
