use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{Nav, SmoothScroll, Toaster, Toasts};
use crate::pages::*;

pub const FIRM_NAME: &str = "Alicerce Engenharia";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Toasts::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/alicerce.css"/>
        <Title text="Alicerce Engenharia - Structural & Civil Engineering"/>
        <Meta name="description" content="Structural, residential, commercial and industrial engineering projects. Request a quote."/>

        <SmoothScroll/>
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
        <Toaster/>
    }
}
