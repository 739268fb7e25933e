//! Feature-impact data and the tabbed panel built from it.
//!
//! Each category becomes one tab; each feature inside it becomes one
//! horizontal bar whose width is the impact percentage and whose colour
//! comes from [`ImpactBand`].

use serde::{Deserialize, Serialize};

/// One model input and its share of the correlation with case counts.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub impact_percentage: f64,
    #[serde(default)]
    pub raw_name: Option<String>,
    /// Correlation strength in [0, 1]
    #[serde(default)]
    pub impact: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl Feature {
    /// Bar width in percent, clamped to [0, 100].
    pub fn bar_width(&self) -> f64 {
        if self.impact_percentage.is_nan() {
            return 0.0;
        }
        self.impact_percentage.clamp(0.0, 100.0)
    }

    pub fn band(&self) -> ImpactBand {
        ImpactBand::from_percentage(self.impact_percentage)
    }

    /// "42.3% Impact"
    pub fn impact_label(&self) -> String {
        format!("{:.1}% Impact", self.impact_percentage)
    }

    /// Render key for the bar at `index` in its category. Display names can
    /// repeat within a category, so the position is part of the key.
    pub fn bar_key(&self, index: usize) -> String {
        let id = self.raw_name.as_deref().unwrap_or(&self.name);
        format!("{index}:{id}")
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FeatureCategory {
    pub name: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct FeatureFactorData {
    #[serde(default)]
    pub disease: Option<String>,
    #[serde(default)]
    pub categories: Vec<FeatureCategory>,
}

/// Colour tier for an impact bar. Lower bounds are exclusive.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum ImpactBand {
    /// 5% or less
    Minimal,
    /// Above 5%
    Low,
    /// Above 15%
    Moderate,
    /// Above 30%
    High,
    /// Above 50%
    Critical,
}

impl ImpactBand {
    pub fn from_percentage(impact: f64) -> Self {
        if impact > 50.0 {
            ImpactBand::Critical
        } else if impact > 30.0 {
            ImpactBand::High
        } else if impact > 15.0 {
            ImpactBand::Moderate
        } else if impact > 5.0 {
            ImpactBand::Low
        } else {
            ImpactBand::Minimal
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ImpactBand::Critical => "#EF4444",
            ImpactBand::High => "#F97316",
            ImpactBand::Moderate => "#FBBF24",
            ImpactBand::Low => "#38BDF8",
            ImpactBand::Minimal => "#94A3B8",
        }
    }
}

/// Tabs over feature categories with exactly one active panel.
#[derive(Debug, PartialEq, Clone)]
pub struct FeaturePanel {
    categories: Vec<FeatureCategory>,
    active: usize,
}

impl FeaturePanel {
    /// Activate the tab at `index`, deactivating every other one.
    ///
    /// Returns false and leaves the panel unchanged for an out-of-range index.
    pub fn switch_to(&mut self, index: usize) -> bool {
        if index >= self.categories.len() {
            return false;
        }
        self.active = index;
        true
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_category(&self) -> &FeatureCategory {
        &self.categories[self.active]
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    pub fn categories(&self) -> &[FeatureCategory] {
        &self.categories
    }

    pub fn tab_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.iter().map(|c| c.name.as_str())
    }
}

/// The feature region after a successful fetch.
#[derive(Debug, PartialEq, Clone)]
pub enum FeaturePanelState {
    /// No categories: show the empty-state message and hide the tab bar
    Empty,
    Tabs(FeaturePanel),
}

impl FeaturePanelState {
    pub const EMPTY_MESSAGE: &'static str = "No factor data available";

    pub fn from_data(data: FeatureFactorData) -> Self {
        if data.categories.is_empty() {
            FeaturePanelState::Empty
        } else {
            FeaturePanelState::Tabs(FeaturePanel {
                categories: data.categories,
                active: 0,
            })
        }
    }

    /// Whether the tab navigation should be shown.
    pub fn tabs_visible(&self) -> bool {
        matches!(self, FeaturePanelState::Tabs(_))
    }
}
