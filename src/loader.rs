use std::time::Duration;

pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded,
}

/// Splash gate in front of the page. `Loading -> Loaded`, once, after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splash {
    delay: Duration,
    phase: LoadPhase,
}

impl Default for Splash {
    fn default() -> Self {
        Self::new(DEFAULT_SPLASH_DELAY)
    }
}

impl Splash {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            phase: LoadPhase::Loading,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Report time since mount; the page timer reports `delay` when it fires.
    /// Loaded is terminal, so an earlier `elapsed` after that changes nothing.
    pub fn elapse(&mut self, elapsed: Duration) -> LoadPhase {
        if elapsed >= self.delay {
            self.finish();
        }
        self.phase
    }

    /// Returns true if this call ended the splash.
    fn finish(&mut self) -> bool {
        let was_loading = self.is_loading();
        self.phase = LoadPhase::Loaded;
        was_loading
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Main content is not interactable while the splash is up.
    pub fn content_inert(&self) -> bool {
        self.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_at_mount() {
        let splash = Splash::default();
        assert!(splash.is_loading());
        assert!(splash.content_inert());
        assert_eq!(splash.delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_hidden_after_delay() {
        let mut splash = Splash::new(Duration::from_millis(1000));
        assert_eq!(splash.elapse(Duration::ZERO), LoadPhase::Loading);
        assert_eq!(splash.elapse(Duration::from_millis(999)), LoadPhase::Loading);
        assert!(splash.content_inert());

        assert_eq!(splash.elapse(Duration::from_millis(1000)), LoadPhase::Loaded);
        assert!(!splash.is_loading());
        assert!(!splash.content_inert());
    }

    #[test]
    fn test_loaded_is_terminal() {
        let mut splash = Splash::new(Duration::from_millis(10));
        splash.elapse(Duration::from_millis(50));
        assert_eq!(splash.elapse(Duration::ZERO), LoadPhase::Loaded);
        assert!(!splash.finish());
    }

    #[test]
    fn test_finish_transitions_once() {
        let mut splash = Splash::default();
        assert!(splash.finish());
        assert!(!splash.finish());
        assert_eq!(splash.phase(), LoadPhase::Loaded);
    }

    #[test]
    fn test_timer_at_configured_delay_ends_splash() {
        let settings: crate::config::SiteSettings =
            serde_json::from_str(r#"{"splash_delay_ms": 250}"#).unwrap();
        let mut splash = Splash::new(settings.splash_delay());
        let delay = splash.delay();
        assert_eq!(delay, Duration::from_millis(250));
        assert_eq!(splash.elapse(delay), LoadPhase::Loaded);
        assert_eq!(splash.elapse(delay), LoadPhase::Loaded);
    }
}
