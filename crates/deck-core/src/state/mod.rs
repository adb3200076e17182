use std::sync::Arc;
use parking_lot::RwLock;
use tracing::info;

use crate::config::{DeckConfig, PresentationSettings};
use crate::error::Result;
use crate::events::{events::SessionEnded, handler_from_fn, EventBus};
use crate::input::InputRouter;
use crate::navigation::NavigationEngine;
use crate::timing::SlideTimer;

/// The presentation session: navigation, decorators and settings
pub struct PresentationState {
    /// The navigation engine
    pub navigation: Arc<NavigationEngine>,

    /// The event bus
    pub event_bus: Arc<EventBus>,

    /// Per-slide timing decorator
    pub timer: Arc<SlideTimer>,

    /// Deck content and parameters
    pub config: Arc<DeckConfig>,

    /// Display settings
    pub settings: Arc<RwLock<PresentationSettings>>,
}

impl PresentationState {
    /// Create a session for a validated deck
    pub fn new(config: DeckConfig) -> Result<Self> {
        config.validate()?;

        let navigation = Arc::new(NavigationEngine::new(config.total_slides)?);
        let event_bus = Arc::new(EventBus::new());

        let timer = Arc::new(SlideTimer::new(config.total_slides));
        navigation.add_subscriber(timer.clone());

        let summary_timer = timer.clone();
        event_bus.subscribe::<SessionEnded>(handler_from_fn(move |event| {
            if let Some(ended) = event.as_any().downcast_ref::<SessionEnded>() {
                let summary = summary_timer.summary();
                info!(
                    "Presentation summary (ended on slide {}): {}",
                    ended.final_slide,
                    summary.to_json()
                );
            }
        }));

        let settings = Arc::new(RwLock::new(config.settings.clone()));

        Ok(Self {
            navigation,
            event_bus,
            timer,
            config: Arc::new(config),
            settings,
        })
    }

    /// Create an input router bound to this session's engine
    pub fn router(&self) -> InputRouter {
        InputRouter::with_swipe_threshold(self.navigation.clone(), self.config.swipe_threshold)
    }

    /// Signal session end so decorators flush their summaries
    pub fn end_session(&self) {
        self.event_bus.publish(SessionEnded {
            final_slide: self.navigation.current_slide(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeckError;
    use crate::events::events::SessionEnded;
    use parking_lot::Mutex;

    #[test]
    fn test_session_wires_timer() {
        let state = PresentationState::new(DeckConfig::default()).unwrap();
        assert_eq!(state.navigation.subscriber_count(), 1);

        let router = state.router();
        router.go_to(3);
        assert_eq!(state.navigation.current_slide(), 3);
        assert_eq!(state.timer.records_at(std::time::Instant::now()).len(), 8);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DeckConfig {
            total_slides: 0,
            slides: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(PresentationState::new(config), Err(DeckError::Configuration(_))));
    }

    #[test]
    fn test_end_session_publishes_final_slide() {
        let state = PresentationState::new(DeckConfig::default()).unwrap();
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        state.event_bus.subscribe::<SessionEnded>(handler_from_fn(move |event| {
            if let Some(ended) = event.as_any().downcast_ref::<SessionEnded>() {
                *sink.lock() = Some(ended.final_slide);
            }
        }));

        state.navigation.jump_to(6);
        state.end_session();
        assert_eq!(*seen.lock(), Some(6));
    }
}
