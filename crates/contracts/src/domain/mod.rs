pub mod a001_barang;
pub mod common;
