pub mod browser;
pub mod components;
pub mod config;
pub mod device;
pub mod error;
pub mod pages;
pub mod playback;
pub mod session;

use components::VideoLanding;
use config::SiteConfig;
use leptos::*;
use leptos_router::*;
use pages::{AboutPage, ContactPage, NotFoundPage, ProductsPage, SolutionsPage};
use wasm_bindgen::prelude::*;

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container page">
                <div class="error-container">
                    <h2>"Something went wrong"</h2>
                    <p>"This page failed to render. Reloading usually fixes it."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Reload"</button>
                </div>
            </main>
        }>
            <RootInner/>
        </ErrorBoundary>
    }
}

/// Loads config once and shares it with every route.
#[component]
fn RootInner() -> impl IntoView {
    provide_context(SiteConfig::load());

    view! {
        <Router>
            <Routes>
                <Route path="/" view=VideoLanding/>
                <Route path="/products" view=ProductsPage/>
                <Route path="/solutions" view=SolutionsPage/>
                <Route path="/contact" view=ContactPage/>
                <Route path="/about" view=AboutPage/>
                <Route path="/*" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    browser::setup_popstate_reload();
    mount_to_body(Root);
}
