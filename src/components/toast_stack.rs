//! Toast Stack Component

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_board_store, BoardStateStoreFields, ToastKind};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_board_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class on:click=move |_| store_dismiss_toast(&store, id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
