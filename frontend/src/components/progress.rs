use leptos::*;

use crate::config::{PROGRESS_BAR_ID, PROGRESS_STATUS_ID, PROGRESS_WRAPPER_ID};

/// Progress bar and status line, hidden until the first upload starts.
#[component]
pub fn ProgressSection(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] progress: Signal<u8>,
    #[prop(into)] status: Signal<String>,
) -> impl IntoView {
    view! {
        <div
            class="progress-section"
            id=PROGRESS_WRAPPER_ID
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <progress
                class="progress-bar"
                id=PROGRESS_BAR_ID
                max="100"
                prop:value=move || f64::from(progress.get())
            ></progress>
            <div class="progress-status" id=PROGRESS_STATUS_ID>
                {move || status.get()}
            </div>
        </div>
    }
}
