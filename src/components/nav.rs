use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::FIRM_NAME;

#[component]
pub fn Nav() -> impl IntoView {
    let (open, set_open) = signal(false);
    let close = move |_: leptos::ev::MouseEvent| set_open.set(false);

    view! {
        <nav class="main-nav">
            <div class="nav-brand">
                <A href="/">{FIRM_NAME}</A>
            </div>

            <button
                class="nav-toggle"
                aria-label="Menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                "☰"
            </button>

            <div class="nav-links" class:open=move || open.get()>
                <a href="/#services" on:click=close>"Services"</a>
                <a href="/#about" on:click=close>"About"</a>
                <a href="/#projects" on:click=close>"Projects"</a>
                <a href="/#contact" class="btn btn-small" on:click=close>"Get a quote"</a>
            </div>
        </nav>
    }
}
