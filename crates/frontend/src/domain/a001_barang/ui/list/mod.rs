pub mod state;

use self::state::{create_state, row_cells, TableView};
use crate::domain::a001_barang::api;
use crate::domain::a001_barang::ui::form::BarangForm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_barang::Barang;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

const COLUMNS: [&str; 5] = ["ID", "Nama Barang", "Kategori", "Stok", "Satuan"];

#[component]
#[allow(non_snake_case)]
pub fn BarangList() -> impl IntoView {
    let state = create_state();
    let table = Memo::new(move |_| state.with(|s| s.table_view()));
    let loading = Memo::new(move |_| table.with(|t| t.loading));
    let (show_form, set_show_form) = signal(false);

    let fetch = move || {
        spawn_local(async move {
            let result = api::fetch_barang().await;
            if let Err(e) = &result {
                log::error!("Error fetching data: {}", e);
            }
            state.update(|s| s.apply_loaded(result));
        });
    };

    let submit = Callback::new(move |_: ()| {
        let mut outgoing = None;
        state.update(|s| outgoing = s.begin_submit());
        let Some(draft) = outgoing else {
            return;
        };

        spawn_local(async move {
            let result = api::create_barang(&draft).await;
            match &result {
                Ok(created) => log::debug!("Barang #{} created", created.id_barang),
                Err(e) => log::error!("Error adding data: {}", e),
            }
            state.update(|s| s.apply_created(result));
        });
    });

    let open_form = Callback::new(move |_: leptos::ev::MouseEvent| set_show_form.set(true));
    let close_form = Callback::new(move |_: ()| set_show_form.set(false));

    fetch();

    view! {
        <PageFrame page_id="a001_barang--list" category=PAGE_CAT_LIST>
            <div class="card">
                <PageHeader
                    title={Barang::list_name()}
                    subtitle="List inventory data barang.".to_string()
                >
                    <Button variant="secondary".to_string() on_click=open_form>
                        {icon("plus")}
                        "Tambah Data"
                    </Button>
                </PageHeader>

                <div class="page__content">
                    {move || {
                        if loading.get() {
                            view! { <div class="loading">"Loading..."</div> }.into_any()
                        } else {
                            view! { <BarangTable table=table /> }.into_any()
                        }
                    }}
                </div>
            </div>

            <Show when=move || show_form.get()>
                <ModalFrame
                    title={format!("Tambah Data {}", Barang::element_name())}
                    description="Isi form berikut untuk menambah data barang baru.".to_string()
                    on_close=close_form
                >
                    <BarangForm state=state on_submit=submit />
                </ModalFrame>
            </Show>
        </PageFrame>
    }
}

#[component]
fn BarangTable(table: Memo<TableView>) -> impl IntoView {
    view! {
        <table class="table">
            <thead class="table__head">
                <tr>
                    {COLUMNS
                        .iter()
                        .map(|c| view! { <th class="table__header-cell">{*c}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || {
                    if table.with(|t| t.is_empty()) {
                        view! {
                            <tr>
                                <td class="table__cell table__cell--empty" colspan="5">
                                    "Tidak ada data."
                                </td>
                            </tr>
                        }
                        .into_any()
                    } else {
                        table
                            .with(|t| t.items.clone())
                            .into_iter()
                            .map(|row| view! { <BarangRow row=row /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </tbody>
        </table>
    }
}

#[component]
fn BarangRow(row: Barang) -> impl IntoView {
    let id = row.id_barang.to_string();
    view! {
        <tr class="table__row" data-id=id>
            {row_cells(&row)
                .into_iter()
                .map(|cell| view! { <td class="table__cell">{cell}</td> })
                .collect_view()}
        </tr>
    }
}
