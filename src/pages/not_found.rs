use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    #[cfg(feature = "ssr")]
    report_missing(&location.pathname.get_untracked());
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    Effect::new(move |_| {
        leptos::logging::error!(
            "404: no route for {}",
            location.pathname.get_untracked()
        );
    });

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Oops! Page not found"</p>
            <A href="/" attr:class="btn btn-primary">"Return to home"</A>
        </div>
    }
}

#[cfg(feature = "ssr")]
fn report_missing(path: &str) {
    tracing::warn!(%path, "404: no route");
}
