// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab and card-expansion state.
//!
//! The dashboard holds which tab is active and which card is expanded: a
//! trivial finite-state value. What matters is the lifecycle around it:
//! chart scenes and headline counters are instantiated per visible tab,
//! and switching tabs must cancel the outgoing counters before the new
//! panel set is built. An orphaned counter would keep requesting frames
//! for a value nothing displays.

use strata_anim::{CountUp, DisplayValue};
use strata_charts::ChartError;
use strata_core::{Palette, Scene};

use crate::data;
use crate::panels::{self, Panel};

/// Dashboard tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tab {
    /// Confidence-band overview.
    Overview,
    /// Accuracy benchmarks.
    Accuracy,
    /// Coverage by template identity.
    Coverage,
    /// Disorder prediction.
    Disorder,
    /// Confidence by sequence length.
    SeqLength,
    /// Per-case annotations.
    CaseStudies,
}

impl Tab {
    /// All tabs in display order.
    pub(crate) const ALL: [Self; 6] = [
        Self::Overview,
        Self::Accuracy,
        Self::Coverage,
        Self::Disorder,
        Self::SeqLength,
        Self::CaseStudies,
    ];

    /// Human-readable tab label.
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Accuracy => "Accuracy",
            Self::Coverage => "Coverage",
            Self::Disorder => "Disorder",
            Self::SeqLength => "Seq Length",
            Self::CaseStudies => "Case Studies",
        }
    }
}

/// The dashboard: active tab, expanded card, and the live per-tab
/// instances (scenes + headline counters).
#[derive(Debug)]
pub(crate) struct Dashboard {
    palette: Palette,
    tab: Tab,
    expanded: Option<usize>,
    panels: Vec<Panel>,
    scenes: Vec<Scene>,
    counters: Vec<CountUp>,
}

impl Dashboard {
    /// Creates the dashboard on the overview tab and starts the headline
    /// counters.
    pub(crate) fn new(palette: Palette, now: f64) -> Result<Self, ChartError> {
        let mut dashboard = Self {
            palette,
            tab: Tab::Overview,
            expanded: None,
            panels: Vec::new(),
            scenes: Vec::new(),
            counters: Vec::new(),
        };
        dashboard.select_tab(Tab::Overview, now)?;
        Ok(dashboard)
    }

    /// Returns the active tab.
    pub(crate) fn tab(&self) -> Tab {
        self.tab
    }

    /// Returns the active tab's panels.
    pub(crate) fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Returns the retained scene per panel.
    pub(crate) fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Returns the expanded card index, if any.
    pub(crate) fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Switches tabs: cancels the outgoing counters, rebuilds the panel
    /// scenes, and restarts the headline counters.
    ///
    /// A build failure leaves the dashboard on the previous tab with its
    /// instances disposed; it never tears down the host view.
    pub(crate) fn select_tab(&mut self, tab: Tab, now: f64) -> Result<(), ChartError> {
        self.dispose_counters();
        self.expanded = None;

        let panels = panels::build(tab, &self.palette)?;
        self.scenes = panels
            .iter()
            .map(|p| {
                let mut scene = Scene::new();
                scene.replace(p.marks.iter().cloned());
                scene
            })
            .collect();
        self.panels = panels;
        self.tab = tab;

        self.counters = data::HEADLINE_STATS
            .iter()
            .map(|&(target, _, _)| {
                let mut counter = CountUp::default();
                counter
                    .set_target(target, now)
                    .expect("headline targets are non-negative literals");
                counter
            })
            .collect();
        Ok(())
    }

    /// Toggles a card's expanded state; expanding one collapses another.
    pub(crate) fn toggle_card(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Advances the headline counters one display refresh.
    ///
    /// Returns the displayed values and whether any counter still needs a
    /// frame (the caller re-registers with its scheduler only then).
    pub(crate) fn tick(&mut self, now: f64) -> (Vec<DisplayValue>, bool) {
        let mut needs_frame = false;
        let values = self
            .counters
            .iter_mut()
            .map(|c| {
                let frame = c.tick(now);
                needs_frame |= frame.needs_frame;
                frame.value
            })
            .collect();
        (values, needs_frame)
    }

    /// Cancels every live counter; used on teardown and before a tab
    /// switch replaces the instances.
    pub(crate) fn dispose_counters(&mut self) {
        for counter in &mut self.counters {
            counter.cancel();
        }
        self.counters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_dashboard_starts_counters_on_overview() {
        let mut d = Dashboard::new(Palette::dark(), 0.0).unwrap();
        assert_eq!(d.tab(), Tab::Overview);
        assert_eq!(d.scenes().len(), d.panels().len());
        let (values, needs_frame) = d.tick(0.0);
        assert_eq!(values.len(), data::HEADLINE_STATS.len());
        assert!(needs_frame);
    }

    #[test]
    fn counters_settle_to_exact_targets() {
        let mut d = Dashboard::new(Palette::dark(), 0.0).unwrap();
        let (values, needs_frame) = d.tick(CountUp::DEFAULT_DURATION);
        assert!(!needs_frame);
        assert_eq!(values[0], DisplayValue::Quantity(98.5));
        assert_eq!(values[3], DisplayValue::Count(20_296));
        assert_eq!(values[3].to_string(), "20296");
    }

    #[test]
    fn tab_switch_rebuilds_scenes_and_restarts_counters() {
        let mut d = Dashboard::new(Palette::dark(), 0.0).unwrap();
        d.tick(CountUp::DEFAULT_DURATION);

        d.select_tab(Tab::Accuracy, 5.0).unwrap();
        assert_eq!(d.tab(), Tab::Accuracy);
        assert!(!d.scenes().is_empty());
        assert!(d.scenes().iter().all(|s| !s.is_empty()));

        // Fresh counters restart from zero at the new mount time.
        let (values, needs_frame) = d.tick(5.0);
        assert!(needs_frame);
        assert_eq!(values[0], DisplayValue::Quantity(0.0));
    }

    #[test]
    fn disposing_counters_stops_all_ticking() {
        let mut d = Dashboard::new(Palette::dark(), 0.0).unwrap();
        d.dispose_counters();
        let (values, needs_frame) = d.tick(0.5);
        assert!(values.is_empty());
        assert!(!needs_frame);
        // Idempotent, like the counters it owns.
        d.dispose_counters();
    }

    #[test]
    fn card_expansion_toggles() {
        let mut d = Dashboard::new(Palette::dark(), 0.0).unwrap();
        assert_eq!(d.expanded(), None);
        d.toggle_card(2);
        assert_eq!(d.expanded(), Some(2));
        d.toggle_card(1);
        assert_eq!(d.expanded(), Some(1));
        d.toggle_card(1);
        assert_eq!(d.expanded(), None);
    }

    #[test]
    fn tab_switch_collapses_the_expanded_card() {
        let mut d = Dashboard::new(Palette::dark(), 0.0).unwrap();
        d.toggle_card(0);
        d.select_tab(Tab::Disorder, 1.0).unwrap();
        assert_eq!(d.expanded(), None);
    }
}
