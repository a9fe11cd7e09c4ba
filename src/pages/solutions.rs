use leptos::*;

use crate::components::NavBar;

#[component]
pub fn SolutionsPage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="container page">
            <header>
                <h1>"Solutions"</h1>
                <p class="tagline">"Where ZON fits in your stack"</p>
            </header>

            <section class="page-section">
                <h2>"Data centers"</h2>
                <p>
                    "Reduce the power draw of GPU fleets by routing each request to the "
                    "smallest configuration that still meets its latency target."
                </p>
            </section>

            <section class="page-section">
                <h2>"Enterprise AI teams"</h2>
                <p>
                    "Run more models on the same budget. ZON tunes batching, precision and "
                    "placement continuously, so capacity grows without new hardware."
                </p>
            </section>

            <section class="page-section">
                <h2>"Model providers"</h2>
                <p>
                    "Lower serving cost per token and pass the savings on, with measurements "
                    "you can show your customers."
                </p>
            </section>
        </main>
    }
}
