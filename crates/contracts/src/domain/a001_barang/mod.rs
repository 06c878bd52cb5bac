pub mod aggregate;

pub use aggregate::{Barang, BarangDraft, BarangValidationError, NewBarang};
