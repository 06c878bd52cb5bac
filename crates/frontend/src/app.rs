use crate::domain::a001_barang::ui::list::BarangList;
use crate::layout::MainLayout;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <MainLayout title="Dashboard">
            <BarangList />
        </MainLayout>
    }
}
