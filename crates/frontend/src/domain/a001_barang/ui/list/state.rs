use contracts::domain::a001_barang::{Barang, BarangDraft};
use contracts::enums::kategori::Kategori;
use leptos::prelude::*;

/// State of the inventory page: loaded items, request flags and the
/// add-item draft.
///
/// All transitions live here so the page component only wires signals and
/// requests together.
#[derive(Clone, Debug, PartialEq)]
pub struct BarangListState {
    /// Items in the order the backend returned them, plus created ones
    pub items: Vec<Barang>,
    /// Initial list request outstanding
    pub loading: bool,
    /// Create request outstanding
    pub saving: bool,
    pub draft: BarangDraft,
}

impl Default for BarangListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            saving: false,
            draft: BarangDraft::default(),
        }
    }
}

impl BarangListState {
    /// Finish the list request. A failure keeps the (empty) list.
    pub fn apply_loaded(&mut self, result: Result<Vec<Barang>, String>) {
        if let Ok(items) = result {
            self.items = items;
        }
        self.loading = false;
    }

    /// The part of the state the list area renders. Leaves the draft out,
    /// so typing in the form does not touch the table.
    pub fn table_view(&self) -> TableView {
        TableView {
            loading: self.loading,
            items: self.items.clone(),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.saving
    }

    /// Enter the submitting state and hand out the draft to send.
    ///
    /// Returns `None` while another request is outstanding.
    pub fn begin_submit(&mut self) -> Option<BarangDraft> {
        if !self.can_submit() {
            return None;
        }
        self.saving = true;
        Some(self.draft.clone())
    }

    /// Finish the create request.
    ///
    /// On success the server's item is appended and the draft cleared; on
    /// failure both stay as they were.
    pub fn apply_created(&mut self, result: Result<Barang, String>) {
        if let Ok(item) = result {
            self.items.push(item);
            self.draft.clear();
        }
        self.saving = false;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.saving {
            "Menyimpan..."
        } else {
            "Simpan"
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableView {
    pub loading: bool,
    pub items: Vec<Barang>,
}

impl TableView {
    /// Table is shown but has nothing to list
    pub fn is_empty(&self) -> bool {
        !self.loading && self.items.is_empty()
    }
}

/// Cell texts of one row, in column order. Values are shown as stored.
pub fn row_cells(item: &Barang) -> [String; 5] {
    [
        item.id_barang.to_string(),
        item.nama_barang.clone(),
        item.kategori.code().to_string(),
        item.stok_awal.to_string(),
        item.satuan.clone(),
    ]
}

/// Options for the category control, in display order
pub fn kategori_options() -> Vec<(String, String)> {
    Kategori::all()
        .into_iter()
        .map(|k| (k.code().to_string(), k.display_name().to_string()))
        .collect()
}

pub fn create_state() -> RwSignal<BarangListState> {
    RwSignal::new(BarangListState::default())
}
