use crate::domain::a001_barang::ui::list::state::{kategori_options, BarangListState};
use crate::shared::components::ui::{Button, Input, Select};
use leptos::prelude::*;

/// Add-item form bound to the page draft.
///
/// Required markers are left to the browser; the backend does the real
/// validation. Inputs and the submit button are disabled while saving.
#[component]
pub fn BarangForm(
    state: RwSignal<BarangListState>,
    /// Fired on submit; the page decides whether a request may start
    on_submit: Callback<()>,
) -> impl IntoView {
    let saving = Signal::derive(move || state.with(|s| s.saving));
    let submit_disabled = Signal::derive(move || !state.with(|s| s.can_submit()));

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="form" on:submit=handle_submit>
            <Input
                id="nama_barang".to_string()
                label="Nama Barang".to_string()
                placeholder="Nama Barang".to_string()
                value=Signal::derive(move || state.with(|s| s.draft.nama_barang.clone()))
                on_input=Callback::new(move |v: String| state.update(|s| s.draft.nama_barang = v))
                disabled=saving
                required=true
            />
            <Select
                id="kategori".to_string()
                label="Kategori".to_string()
                placeholder="Pilih kategori".to_string()
                value=Signal::derive(move || state.with(|s| s.draft.kategori.clone()))
                options=Signal::derive(kategori_options)
                on_change=Callback::new(move |v: String| {
                    state.update(|s| {
                        if !s.draft.set_kategori(&v) {
                            log::warn!("Ignoring unknown kategori {:?}", v);
                        }
                    })
                })
                disabled=saving
                required=true
            />
            <Input
                id="stok_awal".to_string()
                label="Stok Awal".to_string()
                input_type="number".to_string()
                min="0".to_string()
                placeholder="Jumlah Stok".to_string()
                value=Signal::derive(move || state.with(|s| s.draft.stok_awal.clone()))
                on_input=Callback::new(move |v: String| state.update(|s| s.draft.stok_awal = v))
                disabled=saving
                required=true
            />
            <Input
                id="satuan".to_string()
                label="Satuan".to_string()
                placeholder="Satuan Barang".to_string()
                value=Signal::derive(move || state.with(|s| s.draft.satuan.clone()))
                on_input=Callback::new(move |v: String| state.update(|s| s.draft.satuan = v))
                disabled=saving
                required=true
            />
            <div class="form__actions">
                <Button button_type="submit".to_string() disabled=submit_disabled>
                    {move || state.with(|s| s.submit_label())}
                </Button>
            </div>
        </form>
    }
}
