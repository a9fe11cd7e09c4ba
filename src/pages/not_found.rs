use leptos::*;
use leptos_router::{use_location, A};

use crate::components::NavBar;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let path = use_location().pathname;

    view! {
        <NavBar/>
        <main class="container page">
            <header>
                <h1>"Nothing here"</h1>
                <p class="tagline">{move || format!("No page lives at {}", path.get())}</p>
            </header>

            <section class="page-section">
                <p>
                    "The link may be out of date. Try "
                    <A href="/products">"our products"</A>
                    ", "
                    <A href="/solutions">"solutions"</A>
                    " or "
                    <A href="/contact">"drop us a line"</A>
                    "."
                </p>
            </section>
        </main>
    }
}
