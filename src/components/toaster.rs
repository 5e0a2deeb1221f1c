//! Toast Stack Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::notice::NoticeKind;

/// Top-right toast stack; click a toast to dismiss it
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_app_context().toasts;

    view! {
        <div class="toaster">
            <For
                each=move || toasts.items.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = match notice.kind {
                        NoticeKind::Success => "toast success",
                        NoticeKind::Error => "toast error",
                    };
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
