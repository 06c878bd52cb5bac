use serde::{Deserialize, Serialize};

/// Inventory item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kategori {
    SaranaPrasarana,
    BarangHabisPakai,
    DapurUmum,
}

impl Kategori {
    /// Wire and storage code
    pub fn code(&self) -> &'static str {
        match self {
            Kategori::SaranaPrasarana => "sarana_prasarana",
            Kategori::BarangHabisPakai => "barang_habis_pakai",
            Kategori::DapurUmum => "dapur_umum",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Kategori::SaranaPrasarana => "Sarana Prasarana",
            Kategori::BarangHabisPakai => "Barang Habis Pakai",
            Kategori::DapurUmum => "Dapur Umum",
        }
    }

    /// All categories in the order they are offered to the user
    pub fn all() -> Vec<Kategori> {
        vec![
            Kategori::SaranaPrasarana,
            Kategori::BarangHabisPakai,
            Kategori::DapurUmum,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "sarana_prasarana" => Some(Kategori::SaranaPrasarana),
            "barang_habis_pakai" => Some(Kategori::BarangHabisPakai),
            "dapur_umum" => Some(Kategori::DapurUmum),
            _ => None,
        }
    }
}

impl std::fmt::Display for Kategori {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
