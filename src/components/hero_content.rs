use leptos::*;

struct HeroStat {
    value: &'static str,
    label: &'static str,
    accent: &'static str,
}

const STATS: [HeroStat; 3] = [
    HeroStat {
        value: "35%+",
        label: "Energy Reduction",
        accent: "stat-orange",
    },
    HeroStat {
        value: "50%+",
        label: "Cost Savings",
        accent: "stat-gold",
    },
    HeroStat {
        value: "40%",
        label: "Capacity Increase",
        accent: "stat-red",
    },
];

/// Tagline, logo, pitch and headline numbers shown over the hero video.
#[component]
pub fn HeroContent(#[prop(into)] logo: String) -> impl IntoView {
    view! {
        <h1 class="hero-tagline">"ZON builds AI that makes AI better"</h1>

        <div class="hero-logo">
            <img src=logo alt="ZON"/>
        </div>

        <p class="hero-description">
            "Revolutionary AI technology that transforms how businesses operate, optimize, and scale."
        </p>

        <div class="hero-stats">
            {STATS
                .iter()
                .map(|stat| {
                    view! {
                        <div class="hero-stat">
                            <div class=format!("stat-value {}", stat.accent)>{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
