//! Dismissable banner showing the current notice, if any.

use leptos::prelude::*;

use crate::state::notice::{NoticeLevel, NoticeState};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();

    let class = move || match notice.get().level {
        NoticeLevel::Info => "notice",
        NoticeLevel::Error => "notice notice--error",
    };
    let message = move || notice.get().message.unwrap_or_default();

    view! {
        <Show when=move || notice.get().message.is_some()>
            <div class=class role="alert">
                <span>{message}</span>
                <button class="notice__close" on:click=move |_| notice.update(NoticeState::dismiss)>
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
