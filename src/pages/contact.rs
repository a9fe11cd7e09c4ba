use leptos::*;

use crate::components::NavBar;

const CONTACT_EMAIL: &str = "hello@zon.ai";

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="container page">
            <header>
                <h1>"Contact"</h1>
                <p class="tagline">"Talk to the team"</p>
            </header>

            <section class="page-section">
                <p>
                    "Want to see what ZON does on your workloads? Send us a note and we'll "
                    "set up a pilot."
                </p>
                <p>
                    <a href=format!("mailto:{}", CONTACT_EMAIL)>{CONTACT_EMAIL}</a>
                </p>
            </section>
        </main>
    }
}
