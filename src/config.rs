use serde::Deserialize;

use crate::error::Result;

/// Id of the optional inline JSON block in `index.html` that overrides defaults.
const CONFIG_ELEMENT_ID: &str = "site-config";

/// What a visitor returning via in-app navigation sees behind the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReturnPolicy {
    /// Play the short companion clip from zero.
    ShortClip,
    /// Play the main clip from a fixed offset before its end.
    SeekNearEnd,
    /// Play the main clip from its midpoint.
    SeekHalfway,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Fraction of the clip after which the navigation bar appears.
    pub nav_reveal: f64,
    /// Fraction of the clip after which the hero content appears.
    pub content_reveal: f64,
    /// Delay between `loadeddata` and the `play()` call.
    pub play_delay_ms: u32,
    /// On mobile, force the reveal if the video still hasn't loaded by then.
    pub mobile_fallback_ms: u32,
    pub return_policy: ReturnPolicy,
    /// Whether a navigation return also needs the clip to have finished once.
    pub require_played_once: bool,
    /// Used by [`ReturnPolicy::SeekNearEnd`].
    pub near_end_offset_secs: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            nav_reveal: 0.30,
            content_reveal: 0.35,
            play_delay_ms: 100,
            mobile_fallback_ms: 3000,
            return_policy: ReturnPolicy::ShortClip,
            require_played_once: true,
            near_end_offset_secs: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub hero_video: String,
    pub hero_video_short: String,
    pub logo: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            hero_video: "/assets/hero-video.mp4".to_string(),
            hero_video_short: "/assets/hero-video-short.mp4".to_string(),
            logo: "/assets/logo-transparent.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub assets: AssetConfig,
    pub playback: PlaybackConfig,
    pub nav: NavConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset (px) past which the navbar gets its solid background.
    pub scroll_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
        }
    }
}

impl SiteConfig {
    /// Parse a config document. Missing fields keep their defaults and
    /// reveal fractions are clamped into `[0, 1]`.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: SiteConfig = serde_json::from_str(json)?;
        config.playback.nav_reveal = clamp_fraction(config.playback.nav_reveal);
        config.playback.content_reveal = clamp_fraction(config.playback.content_reveal);
        if !config.playback.near_end_offset_secs.is_finite()
            || config.playback.near_end_offset_secs < 0.0
        {
            config.playback.near_end_offset_secs = PlaybackConfig::default().near_end_offset_secs;
        }
        Ok(config)
    }

    /// Load the config from `index.html`.
    ///
    /// # Fallback Behavior
    ///
    /// No config block means defaults, silently. A block that doesn't parse
    /// is logged and replaced by defaults so the page still renders.
    pub fn load() -> Self {
        let Some(text) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
        else {
            return SiteConfig::default();
        };

        if text.trim().is_empty() {
            return SiteConfig::default();
        }

        match SiteConfig::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ZON: {} (using defaults)", e);
                SiteConfig::default()
            }
        }
    }
}

fn clamp_fraction(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert!((config.playback.nav_reveal - 0.30).abs() < 1e-9);
        assert!((config.playback.content_reveal - 0.35).abs() < 1e-9);
        assert!((config.nav.scroll_threshold - 50.0).abs() < 1e-9);
        assert_eq!(config.playback.return_policy, ReturnPolicy::ShortClip);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "playback": { "return_policy": "seek-halfway", "play_delay_ms": 0 } }"#,
        )
        .unwrap();
        assert_eq!(config.playback.return_policy, ReturnPolicy::SeekHalfway);
        assert_eq!(config.playback.play_delay_ms, 0);
        assert_eq!(config.playback.mobile_fallback_ms, 3000);
        assert_eq!(config.assets, AssetConfig::default());
    }

    #[test]
    fn test_reveal_fractions_are_clamped() {
        let config = SiteConfig::from_json(
            r#"{ "playback": { "nav_reveal": -0.5, "content_reveal": 7.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.playback.nav_reveal, 0.0);
        assert_eq!(config.playback.content_reveal, 1.0);
    }

    #[test]
    fn test_negative_near_end_offset_resets() {
        let config =
            SiteConfig::from_json(r#"{ "playback": { "near_end_offset_secs": -3 } }"#).unwrap();
        assert_eq!(config.playback.near_end_offset_secs, 2.0);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(SiteConfig::from_json("{ not json").is_err());
        assert!(SiteConfig::from_json(r#"{ "playback": { "return_policy": "loop" } }"#).is_err());
    }
}
