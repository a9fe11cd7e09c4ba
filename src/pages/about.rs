use leptos::*;
use leptos_router::A;

use crate::components::NavBar;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="container page">
            <header>
                <h1>"About ZON"</h1>
                <p class="tagline">"We build AI that makes AI better"</p>
            </header>

            <section class="page-section">
                <h2>"Why we exist"</h2>
                <p>
                    "Modern AI is expensive to run. Most of that cost is waste: idle "
                    "accelerators, oversized models, serving plans nobody revisits. ZON finds "
                    "that waste automatically and removes it."
                </p>
            </section>

            <section class="page-section">
                <h2>"By the numbers"</h2>
                <ul>
                    <li>"35%+ energy reduction across customer deployments"</li>
                    <li>"50%+ cost savings on inference spend"</li>
                    <li>"40% capacity increase on existing hardware"</li>
                </ul>
                <p>
                    "See the "
                    <A href="/products">"products"</A>
                    " or "
                    <A href="/contact">"get in touch"</A>
                    "."
                </p>
            </section>
        </main>
    }
}
