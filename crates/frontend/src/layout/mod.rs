use leptos::prelude::*;

/// Application frame: top header with the page title and the content area.
///
/// ```text
/// +------------------------------------------+
/// |  header: title                           |
/// +------------------------------------------+
/// |  content                                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn MainLayout(
    /// Shown in the header and used as the document title
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&title);
    }

    view! {
        <div class="app-layout">
            <header data-zone="header" class="header">
                <span class="header__title">{title}</span>
            </header>
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
