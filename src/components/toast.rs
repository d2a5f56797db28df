use crate::notice::Toast;
use leptos::*;

#[component]
pub fn ToastStack(toasts: ReadSignal<Vec<(u64, Toast)>>) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|(id, _)| *id
                children=|(_, toast)| view! {
                    <div class=toast.css_class()>{toast.message.clone()}</div>
                }
            />
        </div>
    }
}
