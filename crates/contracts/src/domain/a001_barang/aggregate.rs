use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::domain::common::AggregateRoot;
use crate::enums::kategori::Kategori;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Inventory item as stored and returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barang {
    /// Server-assigned identifier
    pub id_barang: i64,
    pub nama_barang: String,
    pub kategori: Kategori,
    pub stok_awal: u32,
    /// Unit of measure
    pub satuan: String,
}

impl AggregateRoot for Barang {
    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "barang"
    }

    fn element_name() -> &'static str {
        "Barang"
    }

    fn list_name() -> &'static str {
        "Data Barang"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Add-item form in progress.
///
/// Every field is raw text exactly as typed; the backend does the coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BarangDraft {
    #[serde(default)]
    pub nama_barang: String,
    /// Category code, empty until chosen
    #[serde(default)]
    pub kategori: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub stok_awal: String,
    #[serde(default)]
    pub satuan: String,
}

/// Validated create request, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBarang {
    pub nama_barang: String,
    pub kategori: Kategori,
    pub stok_awal: u32,
    pub satuan: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarangValidationError {
    #[error("field `{0}` is required")]
    Required(&'static str),

    #[error("unknown kategori: {0}")]
    UnknownKategori(String),

    #[error("stok_awal must be a whole number, got {0:?}")]
    StokNotNumber(String),

    #[error("stok_awal cannot be negative")]
    StokNegative,
}

impl BarangDraft {
    /// Set the category from a control value.
    ///
    /// Only the known codes and the empty "not chosen" value are accepted.
    /// Returns `false` and leaves the draft untouched otherwise.
    pub fn set_kategori(&mut self, code: &str) -> bool {
        if code.is_empty() || Kategori::from_code(code).is_some() {
            self.kategori = code.to_string();
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<NewBarang, BarangValidationError> {
        let nama_barang = required("nama_barang", &self.nama_barang)?;
        let kategori_code = required("kategori", &self.kategori)?;
        let stok_text = required("stok_awal", &self.stok_awal)?;
        let satuan = required("satuan", &self.satuan)?;

        let kategori = Kategori::from_code(&kategori_code)
            .ok_or(BarangValidationError::UnknownKategori(kategori_code))?;

        let stok_awal = match stok_text.parse::<i64>() {
            Ok(n) if n < 0 => return Err(BarangValidationError::StokNegative),
            Ok(n) => u32::try_from(n)
                .map_err(|_| BarangValidationError::StokNotNumber(stok_text.clone()))?,
            Err(_) => return Err(BarangValidationError::StokNotNumber(stok_text)),
        };

        Ok(NewBarang {
            nama_barang,
            kategori,
            stok_awal,
            satuan,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, BarangValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BarangValidationError::Required(field));
    }
    Ok(trimmed.to_string())
}

/// Accepts `"12"` as well as `12` for numeric form fields
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(nama: &str, kategori: &str, stok: &str, satuan: &str) -> BarangDraft {
        BarangDraft {
            nama_barang: nama.into(),
            kategori: kategori.into(),
            stok_awal: stok.into(),
            satuan: satuan.into(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_draft() {
        let new = draft(" Beras ", "dapur_umum", " 25 ", "kg").validate().unwrap();
        assert_eq!(
            new,
            NewBarang {
                nama_barang: "Beras".into(),
                kategori: Kategori::DapurUmum,
                stok_awal: 25,
                satuan: "kg".into(),
            }
        );
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        assert_eq!(
            BarangDraft::default().validate(),
            Err(BarangValidationError::Required("nama_barang"))
        );
        assert_eq!(
            draft("Meja", "sarana_prasarana", "3", "  ").validate(),
            Err(BarangValidationError::Required("satuan"))
        );
    }

    #[test]
    fn test_validate_rejects_bad_stock() {
        assert_eq!(
            draft("Sabun", "barang_habis_pakai", "-4", "pcs").validate(),
            Err(BarangValidationError::StokNegative)
        );
        assert_eq!(
            draft("Sabun", "barang_habis_pakai", "sepuluh", "pcs").validate(),
            Err(BarangValidationError::StokNotNumber("sepuluh".into()))
        );
        assert_eq!(
            draft("Sabun", "barang_habis_pakai", "1.5", "pcs").validate(),
            Err(BarangValidationError::StokNotNumber("1.5".into()))
        );
    }

    #[test]
    fn test_validate_rejects_unknown_kategori() {
        assert_eq!(
            draft("Kursi", "mebel", "1", "unit").validate(),
            Err(BarangValidationError::UnknownKategori("mebel".into()))
        );
    }

    #[test]
    fn test_set_kategori_only_takes_known_codes() {
        let mut d = BarangDraft::default();
        assert!(d.set_kategori("sarana_prasarana"));
        assert_eq!(d.kategori, "sarana_prasarana");

        assert!(!d.set_kategori("elektronik"));
        assert_eq!(d.kategori, "sarana_prasarana");

        assert!(d.set_kategori(""));
        assert_eq!(d.kategori, "");
    }

    #[test]
    fn test_draft_accepts_numeric_stock_on_the_wire() {
        let d: BarangDraft = serde_json::from_str(
            r#"{"nama_barang":"Gas","kategori":"dapur_umum","stok_awal":4,"satuan":"tabung"}"#,
        )
        .unwrap();
        assert_eq!(d.stok_awal, "4");

        let d: BarangDraft = serde_json::from_str(r#"{"stok_awal":"7"}"#).unwrap();
        assert_eq!(d.stok_awal, "7");
        assert!(d.nama_barang.is_empty());
    }

    #[test]
    fn test_draft_serializes_as_four_text_fields() {
        let value = serde_json::to_value(draft("Gas", "dapur_umum", "4", "tabung")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "nama_barang": "Gas",
                "kategori": "dapur_umum",
                "stok_awal": "4",
                "satuan": "tabung"
            })
        );
    }

    #[test]
    fn test_clear_resets_to_empty_strings() {
        let mut d = draft("Gas", "dapur_umum", "4", "tabung");
        d.clear();
        assert_eq!(d, BarangDraft::default());
        assert_eq!(d.satuan, "");
    }

    #[test]
    fn test_barang_naming() {
        assert_eq!(Barang::full_name(), "a001_barang");
        assert_eq!(Barang::list_name(), "Data Barang");
    }
}
