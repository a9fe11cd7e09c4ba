use gloo_timers::callback::Timeout;
use leptos::*;
use wasm_bindgen_futures::JsFuture;

use crate::components::{HeroContent, NavBar};
use crate::config::{PlaybackConfig, SiteConfig};
use crate::device::detect_mobile;
use crate::playback::{Command, LandingEvent, LandingState, VideoSource};
use crate::session::{mark_video_played_once, mark_visited_home, take_visit_context, SessionFlagStore};

/// Connects the playback reducer to the real `<video>` element.
///
/// Everything here is `Copy` so it can be captured by event handlers and
/// timer callbacks alike. Callbacks that outlive the component find the
/// signal disposed and do nothing.
#[derive(Clone, Copy)]
struct LandingDriver {
    state: RwSignal<LandingState>,
    video: NodeRef<html::Video>,
    config: PlaybackConfig,
}

impl LandingDriver {
    fn alive(self) -> bool {
        self.state.try_with_untracked(|_| ()).is_some()
    }

    fn dispatch(self, event: LandingEvent) {
        let config = self.config;
        let Some(commands) = self.state.try_update(|s| s.handle_event(event, &config)) else {
            return;
        };
        self.run(commands);
    }

    fn run(self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::Play { delay_ms: 0 } => self.play(),
                Command::Play { delay_ms } => {
                    Timeout::new(delay_ms, move || self.play()).forget();
                }
                Command::Seek(position) => {
                    if let Some(video) = self.video.get_untracked() {
                        video.set_current_time(position);
                    }
                }
                Command::PersistVisitedHome => mark_visited_home(&SessionFlagStore),
                Command::PersistPlayedOnce => mark_video_played_once(&SessionFlagStore),
                Command::ScheduleFallback { delay_ms } => {
                    Timeout::new(delay_ms, move || self.dispatch(LandingEvent::FallbackElapsed))
                        .forget();
                }
            }
        }
    }

    /// Start playback. A rejected `play()` (autoplay policy, decode failure)
    /// is reported back as [`LandingEvent::PlaybackBlocked`].
    fn play(self) {
        if !self.alive() {
            return;
        }
        let Some(video) = self.video.get_untracked() else {
            return;
        };

        match video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("video play rejected: {:?}", e);
                    self.dispatch(LandingEvent::PlaybackBlocked);
                }
            }),
            Err(e) => {
                log::debug!("video play failed: {:?}", e);
                self.dispatch(LandingEvent::PlaybackBlocked);
            }
        }
    }

    fn duration(self) -> f64 {
        self.video
            .get_untracked()
            .map(|v| v.duration())
            .unwrap_or(f64::NAN)
    }
}

/// Full-screen hero video landing page.
#[component]
pub fn VideoLanding() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let mobile = detect_mobile();

    let visit = take_visit_context(&SessionFlagStore, mobile);
    let (initial, commands) = LandingState::mount(&visit, &config.playback);

    let driver = LandingDriver {
        state: create_rw_signal(initial),
        video: create_node_ref::<html::Video>(),
        config: config.playback,
    };
    driver.run(commands);

    let state = driver.state;
    let video_ref = driver.video;
    let full_src = config.assets.hero_video.clone();
    let short_src = config.assets.hero_video_short.clone();
    let video_src = move || match state.with(|s| s.source) {
        VideoSource::Full => full_src.clone(),
        VideoSource::Short => short_src.clone(),
    };

    let preload = if mobile { "none" } else { "auto" };

    let content_style = move || {
        if state.with(LandingState::suppress_content_transition) {
            "transition: none"
        } else {
            "transition: all 3000ms ease-in-out"
        }
    };

    view! {
        <div class="landing">
            <video
                node_ref=video_ref
                class="landing-video"
                src=video_src
                muted=true
                prop:muted=true
                playsinline=true
                preload=preload
                on:loadeddata=move |_| {
                    let duration = driver.duration();
                    driver.dispatch(LandingEvent::LoadedData { duration });
                }
                on:play=move |_| driver.dispatch(LandingEvent::Play)
                on:timeupdate=move |_| {
                    if let Some(video) = driver.video.get_untracked() {
                        driver.dispatch(LandingEvent::TimeUpdate {
                            current: video.current_time(),
                            duration: video.duration(),
                        });
                    }
                }
                on:ended=move |_| driver.dispatch(LandingEvent::Ended)
                on:error=move |_| {
                    log::debug!("hero video failed to load, showing fallback background");
                    driver.dispatch(LandingEvent::MediaError);
                }
            ></video>

            <Show when=move || state.with(|s| s.video_error)>
                <div class="landing-fallback"></div>
            </Show>

            <div class="landing-overlay"></div>

            <Show when=move || state.with(|s| s.nav_shown)>
                <div class="landing-nav" class:visible=move || state.with(|s| s.content_shown)>
                    <NavBar/>
                </div>
            </Show>

            <div class="landing-content">
                <div
                    class="hero"
                    class:visible=move || state.with(|s| s.content_shown)
                    style=content_style
                >
                    <HeroContent logo=config.assets.logo.clone()/>
                </div>

                <Show when=move || state.with(LandingState::replay_available)>
                    <div class="replay">
                        <button class="replay-button" on:click=move |_| driver.dispatch(LandingEvent::Replay)>
                            "▶ Replay Video"
                        </button>
                    </div>
                </Show>
            </div>

            <Show when=move || state.with(LandingState::loading)>
                <div class="landing-loading">
                    <div class="spinner"></div>
                    <p>"Loading video..."</p>
                </div>
            </Show>
        </div>
    }
}
