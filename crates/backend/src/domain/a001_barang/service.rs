use super::repository;
use crate::shared::data::db::get_connection;
use contracts::domain::a001_barang::{Barang, BarangDraft};
use sea_orm::ConnectionTrait;

/// List of all items, oldest first
pub async fn list_all() -> anyhow::Result<Vec<Barang>> {
    repository::list_all(get_connection()).await
}

/// Create a new item from the submitted form.
///
/// Validation failures come back as `BarangValidationError` inside the
/// `anyhow::Error`, so callers can tell them apart from storage errors.
pub async fn create(draft: BarangDraft) -> anyhow::Result<Barang> {
    create_in(get_connection(), draft).await
}

pub(crate) async fn create_in<C: ConnectionTrait>(
    db: &C,
    draft: BarangDraft,
) -> anyhow::Result<Barang> {
    let new_item = draft.validate()?;
    let created = repository::insert(db, &new_item).await?;
    tracing::info!(
        "Created barang #{} '{}' ({})",
        created.id_barang,
        created.nama_barang,
        created.kategori
    );
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;
    use contracts::domain::a001_barang::BarangValidationError;
    use contracts::enums::kategori::Kategori;

    #[tokio::test]
    async fn test_create_coerces_numeric_text() {
        let db = test_connection().await;
        let draft = BarangDraft {
            nama_barang: "Tenda".into(),
            kategori: "sarana_prasarana".into(),
            stok_awal: "08".into(),
            satuan: "buah".into(),
        };

        let created = create_in(&db, draft).await.unwrap();
        assert_eq!(created.stok_awal, 8);
        assert_eq!(created.kategori, Kategori::SaranaPrasarana);
        assert_eq!(repository::list_all(&db).await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_invalid_draft_is_not_written() {
        let db = test_connection().await;
        let draft = BarangDraft {
            nama_barang: "Tenda".into(),
            kategori: "".into(),
            stok_awal: "1".into(),
            satuan: "buah".into(),
        };

        let err = create_in(&db, draft).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<BarangValidationError>(),
            Some(&BarangValidationError::Required("kategori"))
        );
        assert!(repository::list_all(&db).await.unwrap().is_empty());
    }
}
