//! Landing-page playback state machine.
//!
//! The hero video drives when the navigation bar and the hero content
//! appear. All of that logic lives here as a plain reducer over
//! [`LandingEvent`]s so it can be tested without a browser. The view owns a
//! [`LandingState`], feeds it media events, and executes the [`Command`]s it
//! returns against the real `<video>` element and session storage.

use crate::config::{PlaybackConfig, ReturnPolicy};

/// Visit history for the current tab, read once when the landing page mounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitContext {
    /// The visitor arrived here through an in-app link.
    pub direct_navigation: bool,
    /// The landing page has been shown in this tab before.
    pub visited_before: bool,
    /// The full hero clip has played to the end in this tab.
    pub played_once: bool,
    pub mobile: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// First visit (or fresh load): timed reveals apply.
    Initial,
    /// The visitor pressed "Replay": timed reveals apply again.
    Replay,
    /// Returning through in-app navigation: everything is visible at once.
    NavigationReturn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoSource {
    Full,
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LandingEvent {
    /// `loadeddata`; `duration` may be NaN for streams without metadata.
    LoadedData { duration: f64 },
    Play,
    TimeUpdate { current: f64, duration: f64 },
    Ended,
    /// `error` on the video element.
    MediaError,
    /// The `play()` promise was rejected (autoplay policy and similar).
    PlaybackBlocked,
    /// The mobile reveal fallback timer fired.
    FallbackElapsed,
    Replay,
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Play { delay_ms: u32 },
    Seek(f64),
    PersistVisitedHome,
    PersistPlayedOnce,
    ScheduleFallback { delay_ms: u32 },
}

/// Pick the playback mode for a fresh mount.
///
/// Mobile always gets the initial experience.
pub fn resolve_mode(ctx: &VisitContext, config: &PlaybackConfig) -> PlaybackMode {
    if ctx.mobile {
        return PlaybackMode::Initial;
    }
    let played = ctx.played_once || !config.require_played_once;
    if ctx.direct_navigation && ctx.visited_before && played {
        PlaybackMode::NavigationReturn
    } else {
        PlaybackMode::Initial
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LandingState {
    pub mode: PlaybackMode,
    pub source: VideoSource,
    pub video_loaded: bool,
    pub video_error: bool,
    pub content_shown: bool,
    pub nav_shown: bool,
    pub video_ended: bool,
}

impl LandingState {
    /// Initial state for a freshly mounted landing page, plus the commands to
    /// run right away.
    pub fn mount(ctx: &VisitContext, config: &PlaybackConfig) -> (Self, Vec<Command>) {
        let mode = resolve_mode(ctx, config);
        let mut commands = Vec::new();

        let mut state = LandingState {
            mode,
            source: VideoSource::Full,
            video_loaded: false,
            video_error: false,
            content_shown: false,
            nav_shown: false,
            video_ended: false,
        };

        match mode {
            PlaybackMode::NavigationReturn => {
                if config.return_policy == ReturnPolicy::ShortClip {
                    state.source = VideoSource::Short;
                }
                state.reveal_all();
            }
            _ => {
                commands.push(Command::PersistVisitedHome);
                if ctx.mobile {
                    // Mobile uses `preload="none"`, so nothing loads until
                    // `play()` is called. Content doesn't wait for it.
                    state.reveal_all();
                    commands.push(Command::Play {
                        delay_ms: config.play_delay_ms,
                    });
                    commands.push(Command::ScheduleFallback {
                        delay_ms: config.mobile_fallback_ms,
                    });
                }
            }
        }

        log::info!("landing mounted in {:?} mode ({:?})", mode, ctx);
        (state, commands)
    }

    /// Apply one event and return the side effects it calls for.
    pub fn handle_event(&mut self, event: LandingEvent, config: &PlaybackConfig) -> Vec<Command> {
        log::debug!("landing event {:?} in {:?} mode", event, self.mode);

        match event {
            LandingEvent::LoadedData { duration } => {
                self.video_loaded = true;
                let mut commands = Vec::with_capacity(2);
                if let Some(start) = self.start_position(duration, config) {
                    commands.push(Command::Seek(start));
                }
                commands.push(Command::Play {
                    delay_ms: config.play_delay_ms,
                });
                commands
            }
            LandingEvent::Play => Vec::new(),
            LandingEvent::TimeUpdate { current, duration } => {
                if self.mode == PlaybackMode::NavigationReturn || !is_known_duration(duration) {
                    return Vec::new();
                }
                if !self.nav_shown && current >= duration * config.nav_reveal {
                    self.nav_shown = true;
                }
                if !self.content_shown && current >= duration * config.content_reveal {
                    self.content_shown = true;
                }
                Vec::new()
            }
            LandingEvent::Ended => {
                self.video_ended = true;
                self.reveal_all();
                vec![Command::PersistPlayedOnce]
            }
            LandingEvent::MediaError => {
                self.video_error = true;
                self.video_loaded = true;
                self.reveal_all();
                Vec::new()
            }
            LandingEvent::PlaybackBlocked => {
                self.reveal_all();
                Vec::new()
            }
            LandingEvent::FallbackElapsed => {
                // Stop waiting on a video that never produced data
                if !self.video_loaded {
                    self.video_loaded = true;
                    self.reveal_all();
                }
                Vec::new()
            }
            LandingEvent::Replay => {
                self.content_shown = false;
                self.nav_shown = false;
                self.video_ended = false;
                self.mode = PlaybackMode::Replay;

                if self.source == VideoSource::Full {
                    vec![
                        Command::Seek(0.0),
                        Command::Play {
                            delay_ms: 0,
                        },
                    ]
                } else {
                    // Swapping the source reloads the element; the next
                    // `LoadedData` restarts it from zero.
                    self.source = VideoSource::Full;
                    Vec::new()
                }
            }
        }
    }

    /// Where playback should start once data is available, if not wherever
    /// the element already is.
    fn start_position(&self, duration: f64, config: &PlaybackConfig) -> Option<f64> {
        match self.mode {
            PlaybackMode::Initial => None,
            PlaybackMode::Replay => Some(0.0),
            PlaybackMode::NavigationReturn => {
                if !is_known_duration(duration) {
                    return None;
                }
                match config.return_policy {
                    ReturnPolicy::ShortClip => None,
                    ReturnPolicy::SeekNearEnd => {
                        Some((duration - config.near_end_offset_secs).max(0.0))
                    }
                    ReturnPolicy::SeekHalfway => Some(duration / 2.0),
                }
            }
        }
    }

    fn reveal_all(&mut self) {
        self.content_shown = true;
        self.nav_shown = true;
    }

    /// Whether the loading spinner covers the page.
    pub fn loading(&self) -> bool {
        !self.video_loaded
    }

    pub fn replay_available(&self) -> bool {
        self.video_ended
    }

    /// During a replay the content must vanish at once rather than fade out.
    pub fn suppress_content_transition(&self) -> bool {
        self.mode == PlaybackMode::Replay && !self.content_shown
    }
}

fn is_known_duration(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0
}
