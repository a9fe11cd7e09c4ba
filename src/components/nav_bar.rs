use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::use_location;

use crate::browser::{scroll_offset, scroll_to_top};
use crate::config::SiteConfig;
use crate::session::{mark_direct_navigation, FlagStore, SessionFlagStore};

const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/products", "Products"),
    ("/solutions", "Solutions"),
    ("/about", "About"),
    ("/contact", "Contact"),
];

/// Let the new route render before scrolling it to the top.
const SCROLL_AFTER_NAVIGATE_MS: u32 = 100;

/// Two independent toggles: the scrolled background and the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Update `scrolled` from the current offset. Returns whether it changed.
    pub fn on_scroll(&mut self, offset: f64, threshold: f64) -> bool {
        let scrolled = offset > threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// A link is active on its own path, and on sub-paths unless it's Home.
fn is_active(current: &str, href: &str) -> bool {
    current == href || (href != "/" && current.starts_with(href))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScrollTiming {
    Now,
    AfterNavigate,
}

/// Going home from another page counts as an in-app return. Clicking Home
/// on `/` doesn't remount the landing page, so it must not leave a marker.
fn marks_direct_navigation(current: &str, href: &str) -> bool {
    href == "/" && current != "/"
}

/// Link click bookkeeping. Must run before the router handles the click,
/// while `current` is still the page being left and the landing page has
/// not yet read the visit flags.
fn prepare_navigation(store: &impl FlagStore, current: &str, href: &str) -> ScrollTiming {
    if current == href {
        return ScrollTiming::Now;
    }
    if marks_direct_navigation(current, href) {
        mark_direct_navigation(store);
    }
    ScrollTiming::AfterNavigate
}

#[component]
pub fn NavBar() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let threshold = config.nav.scroll_threshold;
    let logo = config.assets.logo;

    let state = create_rw_signal(NavState::default());
    let pathname = use_location().pathname;

    let sync_scroll = move || {
        let mut next = state.get_untracked();
        if next.on_scroll(scroll_offset(), threshold) {
            state.set(next);
        }
    };
    // Mounted mid-page (e.g. after a replay) should pick up the offset at once
    sync_scroll();

    let scroll_listener = window_event_listener(ev::scroll, move |_| sync_scroll());
    on_cleanup(move || scroll_listener.remove());

    let link_class = move |href: &'static str| {
        if is_active(&pathname.get(), href) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    // Bound undelegated: the element's own listener fires before the
    // router's window-level click handler swaps the route.
    let on_link_click = move |href: &'static str, from_mobile_menu: bool| {
        if from_mobile_menu {
            state.update(NavState::close_menu);
        }

        match prepare_navigation(&SessionFlagStore, &pathname.get_untracked(), href) {
            ScrollTiming::Now => scroll_to_top(),
            ScrollTiming::AfterNavigate => {
                Timeout::new(SCROLL_AFTER_NAVIGATE_MS, scroll_to_top).forget();
            }
        }
    };

    let desktop_links = NAV_LINKS
        .iter()
        .map(|&(href, label)| {
            view! {
                <a href=href class=move || link_class(href) on:click:undelegated=move |_| on_link_click(href, false)>
                    {label}
                </a>
            }
        })
        .collect_view();

    let mobile_links = move || {
        NAV_LINKS
            .iter()
            .map(|&(href, label)| {
                view! {
                    <a href=href class=move || link_class(href) on:click:undelegated=move |_| on_link_click(href, true)>
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="site-nav" class:scrolled=move || state.with(|s| s.scrolled)>
            <div class="site-nav-inner">
                <a href="/" class="nav-brand" on:click:undelegated=move |_| on_link_click("/", false)>
                    <img src=logo alt="ZON" class="nav-logo"/>
                </a>

                <div class="nav-links">{desktop_links}</div>

                <div class="nav-icons">
                    <button class="nav-icon" aria-label="Search">"⌕"</button>
                    <button class="nav-icon" aria-label="Contact">"✉"</button>
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || state.with(|s| s.menu_open).to_string()
                    on:click=move |_| state.update(NavState::toggle_menu)
                >
                    {move || if state.with(|s| s.menu_open) { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || state.with(|s| s.menu_open)>
                <div class="nav-mobile">
                    {mobile_links}
                    <div class="nav-mobile-icons">
                        <button class="nav-icon" aria-label="Search">"⌕"</button>
                        <button class="nav-icon" aria-label="Contact">"✉"</button>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
