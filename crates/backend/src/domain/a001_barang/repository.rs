use chrono::Utc;
use contracts::domain::a001_barang::{Barang, NewBarang};
use contracts::enums::kategori::Kategori;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_barang")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_barang: i64,
    pub nama_barang: String,
    pub kategori: String,
    pub stok_awal: i64,
    pub satuan: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Barang {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let kategori = Kategori::from_code(&m.kategori).ok_or_else(|| {
            anyhow::anyhow!("row {}: unknown kategori {:?}", m.id_barang, m.kategori)
        })?;
        let stok_awal = u32::try_from(m.stok_awal).map_err(|_| {
            anyhow::anyhow!("row {}: stok_awal out of range: {}", m.id_barang, m.stok_awal)
        })?;

        Ok(Barang {
            id_barang: m.id_barang,
            nama_barang: m.nama_barang,
            kategori,
            stok_awal,
            satuan: m.satuan,
        })
    }
}

/// All items in insertion order.
///
/// Rows that no longer map onto the contract are skipped, not fatal.
pub async fn list_all<C: ConnectionTrait>(db: &C) -> anyhow::Result<Vec<Barang>> {
    let rows = Entity::find()
        .order_by_asc(Column::IdBarang)
        .all(db)
        .await?;

    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        match Barang::try_from(row) {
            Ok(item) => items.push(item),
            Err(e) => tracing::warn!("Skipping barang row: {}", e),
        }
    }
    Ok(items)
}

/// Insert a validated item and return it with its assigned id
pub async fn insert<C: ConnectionTrait>(db: &C, item: &NewBarang) -> anyhow::Result<Barang> {
    let active = ActiveModel {
        id_barang: sea_orm::ActiveValue::NotSet,
        nama_barang: Set(item.nama_barang.clone()),
        kategori: Set(item.kategori.code().to_string()),
        stok_awal: Set(i64::from(item.stok_awal)),
        satuan: Set(item.satuan.clone()),
        created_at: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    model.try_into()
}
