//! Deck configuration
//!
//! A deck is described by a small JSON document. Everything is optional;
//! the built-in deck has eight slides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{DeckError, Result};
use crate::format::{format_metric, MetricUnit};
use crate::input::DEFAULT_SWIPE_THRESHOLD;

/// A labelled number shown on a slide
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: f64,
    #[serde(default = "default_unit")]
    pub unit: MetricUnit,
}

impl Metric {
    pub fn formatted(&self) -> String {
        format_metric(self.value, self.unit)
    }
}

fn default_unit() -> MetricUnit {
    MetricUnit::Plain
}

/// Content of one slide
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SlideSpec {
    pub title: String,
    pub lines: Vec<String>,
    pub metrics: Vec<Metric>,
}

impl SlideSpec {
    fn placeholder(number: usize) -> Self {
        Self {
            title: format!("Slide {}", number),
            ..Default::default()
        }
    }
}

/// Presentation display settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PresentationSettings {
    /// Whether to show the progress strip
    pub show_progress_bar: bool,

    /// Whether to show the position indicator dots
    pub show_indicators: bool,

    /// Whether to use dark mode
    pub dark_mode: bool,

    /// Whether slide items animate in when a slide becomes active
    pub animate_entrances: bool,
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            show_progress_bar: true,
            show_indicators: true,
            dark_mode: true,
            animate_entrances: true,
        }
    }
}

/// Upper bound on `total_slides`; per-slide state is allocated up front
pub const MAX_SLIDES: usize = 5000;

/// Full deck configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DeckConfig {
    pub title: String,

    /// Fixed number of slides for the session
    pub total_slides: usize,

    /// Slide content; missing slides get a placeholder title
    #[serde(default)]
    pub slides: Vec<SlideSpec>,

    /// Minimum horizontal travel for a swipe
    pub swipe_threshold: f32,

    pub settings: PresentationSettings,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            title: "Horn River Investment Presentation".to_string(),
            total_slides: 8,
            slides: builtin_slides(),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            settings: PresentationSettings::default(),
        }
    }
}

impl DeckConfig {
    /// Parse and validate a deck from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DeckConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a deck file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!("Loaded deck '{}' ({} slides) from {:?}", config.title, config.total_slides, path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_slides < 1 {
            return Err(DeckError::Configuration(format!(
                "total_slides must be at least 1, got {}",
                self.total_slides
            )));
        }
        if self.total_slides > MAX_SLIDES {
            return Err(DeckError::Configuration(format!(
                "total_slides must be at most {}, got {}",
                MAX_SLIDES, self.total_slides
            )));
        }
        if self.slides.len() > self.total_slides {
            return Err(DeckError::Configuration(format!(
                "{} slides listed but total_slides is {}",
                self.slides.len(),
                self.total_slides
            )));
        }
        if !(self.swipe_threshold.is_finite() && self.swipe_threshold >= 0.0) {
            return Err(DeckError::Configuration(format!(
                "swipe_threshold must be a non-negative number, got {}",
                self.swipe_threshold
            )));
        }
        Ok(())
    }

    /// Content for a 1-based slide number, padded with placeholders
    pub fn slide(&self, number: usize) -> SlideSpec {
        self.slides
            .get(number.wrapping_sub(1))
            .cloned()
            .unwrap_or_else(|| SlideSpec::placeholder(number))
    }
}

fn builtin_slides() -> Vec<SlideSpec> {
    fn slide(title: &str, lines: &[&str], metrics: Vec<Metric>) -> SlideSpec {
        SlideSpec {
            title: title.to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
            metrics,
        }
    }
    fn metric(label: &str, value: f64, unit: MetricUnit) -> Metric {
        Metric {
            label: label.to_string(),
            value,
            unit,
        }
    }

    vec![
        slide(
            "Horn River Basin Opportunity",
            &["Integrated gas-to-power development", "Long-life reserves with firm offtake"],
            vec![metric("Reserves", 2.5, MetricUnit::Reserves), metric("Capacity", 400.0, MetricUnit::Capacity)],
        ),
        slide(
            "Development Phases",
            &["Phase 1: appraisal and permitting", "Phase 2: first gas and plant build", "Phase 3: full field expansion"],
            vec![],
        ),
        slide(
            "Asset Base",
            &["Upstream acreage", "Gathering and processing", "Generation and transmission"],
            vec![],
        ),
        slide(
            "Competitive Advantages",
            &["Low-cost supply", "Grid access", "Experienced operator"],
            vec![],
        ),
        slide(
            "Timeline",
            &["Permits secured in year one", "Commercial operation in year three"],
            vec![],
        ),
        slide(
            "Financial Overview",
            &["Capital programme and expected returns"],
            vec![
                metric("Capital required", 850_000_000.0, MetricUnit::Currency),
                metric("Project IRR", 18.5, MetricUnit::Percentage),
                metric("Annual EBITDA", 120_000_000.0, MetricUnit::Currency),
            ],
        ),
        slide(
            "Exit Strategy",
            &["Strategic sale", "Infrastructure fund recapitalisation", "Public listing"],
            vec![],
        ),
        slide("Next Steps", &["Due diligence", "Term sheet", "Financial close"], vec![]),
    ]
}
