pub mod kategori;
