// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashboard demo: builds every tab's panels and dumps them as SVG into a
//! single HTML report.
//!
//! The headline counters are driven to settlement with a manually
//! advanced clock, so the run is deterministic and finishes immediately
//! instead of waiting on real display frames.

mod data;
mod html;
mod panels;
mod svg;
mod view;

use kurbo::Rect;
use strata_anim::{FrameClock, ManualClock};
use strata_core::Palette;
use tracing::info;

use crate::view::{Dashboard, Tab};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let palette = Palette::dark();
    let mut clock = ManualClock::new();
    let mut dashboard =
        Dashboard::new(palette, clock.now()).expect("dashboard panels should configure");

    // Settle the headline counters: tick at ~60fps until no counter needs
    // another frame.
    let header = loop {
        let (values, needs_frame) = dashboard.tick(clock.now());
        if !needs_frame {
            break values;
        }
        clock.advance(1.0 / 60.0);
    };
    let header: Vec<(String, String)> = header
        .iter()
        .zip(data::HEADLINE_STATS)
        .map(|(value, &(_, label, suffix))| (format!("{value}{suffix}"), label.to_string()))
        .collect();
    for (value, label) in &header {
        info!(value = %value, label = %label, "headline counter settled");
    }

    let mut sections = Vec::new();
    for tab in Tab::ALL {
        dashboard
            .select_tab(tab, clock.now())
            .expect("dashboard panels should configure");
        for (panel, scene) in dashboard.panels().iter().zip(dashboard.scenes()) {
            let view_box = Rect::new(0.0, 0.0, panel.surface.width, panel.surface.height);
            sections.push(html::HtmlSection::new(
                tab.label(),
                panel.title.clone(),
                svg::scene_to_svg(scene, view_box),
            ));
        }
        info!(
            tab = tab.label(),
            panels = dashboard.panels().len(),
            "rendered tab"
        );
    }
    dashboard.dispose_counters();

    let report = html::render_report("strata dashboard demo", &header, &sections, &palette);
    std::fs::write("strata_demo.html", report).expect("write strata_demo.html");
    info!("wrote strata_demo.html");
}
