use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Modal dialog: overlay, positioned surface and a header with title,
/// optional description and a close button.
///
/// Closes on the close button, on Escape, and on a click that both starts
/// and ends on the overlay itself (selecting text inside the dialog and
/// releasing outside does not close it).
#[component]
pub fn ModalFrame(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    description: MaybeProp<String>,
    /// Called when the modal should close
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Deferred to the next tick: the overlay must not be removed
            // during its own click dispatch
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class="modal" role="dialog" aria-modal="true">
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">{title}</h2>
                        {move || description.get().map(|d| view! {
                            <p class="modal-description">{d}</p>
                        })}
                    </div>
                    <button
                        type="button"
                        class="button button--icon modal__close"
                        aria-label="Tutup"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
