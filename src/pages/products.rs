use leptos::*;

use crate::components::NavBar;

struct Product {
    name: &'static str,
    summary: &'static str,
}

const PRODUCTS: [Product; 3] = [
    Product {
        name: "ZON Optimize",
        summary: "Profiles running models and rewrites their serving plan to cut energy per \
                  request without touching accuracy.",
    },
    Product {
        name: "ZON Scale",
        summary: "Packs more inference onto the hardware you already own by scheduling \
                  workloads around real utilization instead of reserved capacity.",
    },
    Product {
        name: "ZON Insight",
        summary: "Live cost and capacity dashboards for every model in production, down to \
                  the individual endpoint.",
    },
];

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="container page">
            <header>
                <h1>"Products"</h1>
                <p class="tagline">"AI that makes your AI cheaper, faster and smaller."</p>
            </header>

            <section class="card-grid">
                {PRODUCTS
                    .iter()
                    .map(|p| {
                        view! {
                            <div class="card">
                                <h3>{p.name}</h3>
                                <p>{p.summary}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </main>
    }
}
