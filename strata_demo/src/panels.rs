// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tab chart assembly.
//!
//! Each panel is an independent chart instance: a surface, insets, and a
//! mark list. A panel that fails to configure reports its error without
//! taking sibling panels down; the view layer decides what to do with it.

use kurbo::{Point, Rect};
use peniko::Brush;
use strata_charts::{
    AreaMarkSpec, AxisSpec, BarMarkSpec, ChartError, ColorRule, DataSeries, FractionBarSpec,
    GridStyle, Insets, LabelStyle, LineMarkSpec, MeterMarkSpec, Record, RuleMarkSpec, ScaleBand,
    ScaleLinear, Size, StrokeStyle, XySeries,
};
use strata_core::{z_order, Mark, MarkId, Palette, TextAnchor, TextBaseline, TextMark};

use crate::data;
use crate::view::Tab;

/// One renderable dashboard card.
#[derive(Debug)]
pub(crate) struct Panel {
    /// Card title.
    pub(crate) title: String,
    /// Drawing surface for the card's SVG.
    pub(crate) surface: Size,
    /// Generated marks.
    pub(crate) marks: Vec<Mark>,
}

/// Builds the panels for a tab.
pub(crate) fn build(tab: Tab, palette: &Palette) -> Result<Vec<Panel>, ChartError> {
    match tab {
        Tab::Overview => Ok(vec![confidence_bands(palette)?, go_term_coverage(palette)?]),
        Tab::Accuracy => Ok(vec![
            tm_score_distribution(palette)?,
            benchmark_curves(palette)?,
            calibration(palette)?,
            rotamer_accuracy(palette)?,
            heterotypic_contacts(palette)?,
        ]),
        Tab::Coverage => Ok(vec![novelty_coverage(palette)?]),
        Tab::Disorder => Ok(vec![disorder_benchmark(palette)?]),
        Tab::SeqLength => Ok(vec![seq_length_mix(palette)?]),
        Tab::CaseStudies => Ok(vec![case_confidence(palette)?]),
    }
}

fn muted_label(palette: &Palette, font_size: f64) -> LabelStyle {
    LabelStyle::new(palette.muted, font_size)
}

fn grid(palette: &Palette, dashed: bool) -> GridStyle {
    let stroke = if dashed {
        StrokeStyle::dashed(palette.border, 0.5, 3.0, 3.0)
    } else {
        StrokeStyle::solid(palette.border, 0.5)
    };
    GridStyle { stroke }
}

/// Stacked meter rows: label left, value right, track + fill below.
fn meter_rows(
    id_base: u64,
    palette: &Palette,
    max: f64,
    rows: &[(&str, f64, Option<f64>, Brush)],
) -> (Size, Vec<Mark>) {
    const ROW_H: f64 = 26.0;
    const BAR_H: f64 = 8.0;
    let surface = Size::new(340.0, rows.len() as f64 * ROW_H + 4.0);
    let mut marks = Vec::new();

    for (i, (label, value, secondary, fill)) in rows.iter().enumerate() {
        let top = 4.0 + i as f64 * ROW_H;
        let base = id_base + i as u64 * 10;

        marks.push(Mark::text(
            MarkId::from_raw(base + 4),
            z_order::AXIS_LABELS,
            TextMark::new(Point::new(0.0, top + 4.0), (*label).to_string())
                .with_font_size(10.0)
                .with_fill(palette.text)
                .with_baseline(TextBaseline::Middle),
        ));
        marks.push(Mark::text(
            MarkId::from_raw(base + 5),
            z_order::AXIS_LABELS,
            TextMark::new(Point::new(surface.width, top + 4.0), format!("{value}"))
                .with_font_size(10.0)
                .with_fill(fill.clone())
                .with_anchor(TextAnchor::End)
                .with_baseline(TextBaseline::Middle),
        ));

        let frame = Rect::new(0.0, top + 10.0, surface.width, top + 10.0 + BAR_H);
        let mut meter = MeterMarkSpec::new(base, palette.border, fill.clone()).with_max(max);
        if secondary.is_some() {
            meter = meter.with_secondary(palette.muted.with_alpha(0.5));
        }
        marks.extend(meter.marks(*value, *secondary, frame));
    }

    (surface, marks)
}

fn confidence_bands(palette: &Palette) -> Result<Panel, ChartError> {
    let band_colors = [palette.very_high, palette.high, palette.medium, palette.low];
    let rows: Vec<(&str, f64, Option<f64>, Brush)> = data::CONFIDENCE_BANDS
        .iter()
        .zip(band_colors)
        .map(|(&(label, pct), color)| (label, pct, None, Brush::Solid(color.with_alpha(0.85))))
        .collect();
    let (surface, marks) = meter_rows(0x1000, palette, 100.0, &rows);
    Ok(Panel {
        title: "Confidence Bands".to_string(),
        surface,
        marks,
    })
}

fn go_term_coverage(palette: &Palette) -> Result<Panel, ChartError> {
    // Bright fill = total high-confidence coverage; muted underlay = the
    // share that already had a template.
    let rows: Vec<(&str, f64, Option<f64>, Brush)> = data::GO_TERM_COVERAGE
        .iter()
        .map(|&(term, confident, templated)| {
            (
                term,
                confident,
                Some(templated),
                Brush::Solid(palette.very_high.with_alpha(0.85)),
            )
        })
        .collect();
    let (surface, marks) = meter_rows(0x2000, palette, 1.0, &rows);
    Ok(Panel {
        title: "GO-Term Coverage: Novel vs Templated".to_string(),
        surface,
        marks,
    })
}

fn tm_score_distribution(palette: &Palette) -> Result<Panel, ChartError> {
    let surface = Size::new(340.0, 130.0);
    let insets = Insets::new(30.0, 12.0, 14.0, 30.0);
    let chart = strata_charts::ChartSpec::new(surface, insets).with_axis_left(
        AxisSpec::left(0x3100, (0.0, 30.0))
            .with_ticks([0.0, 15.0, 30.0])
            .with_tick_marks(false)
            .with_labels(false)
            .with_domain_line(false)
            .with_grid(grid(palette, true)),
    );

    let series = DataSeries::new(
        data::TM_SCORE_BINS
            .iter()
            .map(|&(bin, pct)| Record::new(bin, pct))
            .collect(),
    )?;

    let plot = chart.plot()?;
    let y_scale = ScaleLinear::try_new((0.0, 30.0), (plot.y1, plot.y0))?;
    let x_unit = ScaleLinear::try_new((0.0, 1.0), (plot.x0, plot.x1))?;
    let band = ScaleBand::new((plot.x0, plot.x1), series.len()).with_gap(4.0);

    let bars = BarMarkSpec::new(0x3000, band, y_scale)
        .with_color(ColorRule::Threshold {
            from_index: data::TM_THRESHOLD_INDEX,
            below: Brush::Solid(palette.high.with_alpha(0.35)),
            at_or_above: Brush::Solid(palette.very_high.with_alpha(0.85)),
        })
        .with_value_labels(muted_label(palette, 7.0))
        .with_category_labels(muted_label(palette, 7.0));

    let threshold = RuleMarkSpec::vertical(MarkId::from_raw(0x3200), 0.67)
        .with_stroke(StrokeStyle::dashed(
            palette.very_high.with_alpha(0.55),
            1.0,
            4.0,
            3.0,
        ))
        .with_label("TM>=0.7 threshold", LabelStyle::new(palette.very_high, 7.5));

    let (_, marks) = chart.marks(|plot| {
        let mut out = bars.marks(&series);
        out.extend(threshold.marks(&x_unit, plot));
        out
    })?;

    Ok(Panel {
        title: "TM-Score Distribution".to_string(),
        surface,
        marks,
    })
}

fn benchmark_curves(palette: &Palette) -> Result<Panel, ChartError> {
    let surface = Size::new(340.0, 140.0);
    let insets = Insets::new(36.0, 12.0, 16.0, 34.0);

    let bin_labels: Vec<String> = data::BENCHMARK_BINS
        .iter()
        .map(|&(range, _, _)| range.to_string())
        .collect();
    let last = bin_labels.len() - 1;

    let chart = strata_charts::ChartSpec::new(surface, insets)
        .with_axis_left(
            AxisSpec::left(0x4100, (75.0, 100.0))
                .with_ticks([75.0, 80.0, 85.0, 90.0, 95.0, 100.0])
                .with_tick_marks(false)
                .with_domain_line(false)
                .with_grid(grid(palette, false))
                .with_style(axis_style(palette, 7.0))
                .with_title("lDDT-Ca (median)"),
        )
        .with_axis_bottom(
            AxisSpec::bottom(0x4200, (0.0, last as f64))
                .with_tick_count(bin_labels.len())
                .with_tick_marks(false)
                .with_domain_line(false)
                .with_style(axis_style(palette, 7.5))
                .with_title("Template sequence identity")
                .with_tick_formatter(move |v, _| {
                    let i = (v.round().max(0.0) as usize).min(last);
                    bin_labels[i].clone()
                }),
        );

    let plot = chart.plot()?;
    let sx = ScaleLinear::try_new((0.0, last as f64), (plot.x0, plot.x1))?;
    let sy = ScaleLinear::try_new((75.0, 100.0), (plot.y1, plot.y0))?;

    let predicted = XySeries::new(
        data::BENCHMARK_BINS
            .iter()
            .enumerate()
            .map(|(i, &(_, af, _))| strata_charts::XyPoint::new(i as f64, af))
            .collect(),
    )?;
    let reference = XySeries::new(
        data::BENCHMARK_BINS
            .iter()
            .enumerate()
            .map(|(i, &(_, _, best))| strata_charts::XyPoint::new(i as f64, best))
            .collect(),
    )?;

    let area = AreaMarkSpec::new(0x4000, sx, sy)
        .with_baseline(75.0)
        .with_fill(palette.very_high.with_alpha(0.07));
    let predicted_line = LineMarkSpec::new(MarkId::from_raw(0x4010), sx, sy)
        .with_stroke(StrokeStyle::solid(palette.very_high, 2.2))
        .with_markers(3.0, palette.very_high);
    let reference_line = LineMarkSpec::new(MarkId::from_raw(0x4020), sx, sy)
        .with_stroke(StrokeStyle::dashed(
            palette.medium.with_alpha(0.75),
            1.5,
            5.0,
            3.0,
        ))
        .with_markers(2.5, palette.medium.with_alpha(0.85));

    let (af_end, best_end) = {
        let &(_, af, best) = data::BENCHMARK_BINS.last().expect("non-empty dataset");
        (af, best)
    };

    let (_, marks) = chart.marks(|plot| {
        let mut out = area.marks(&predicted);
        out.extend(reference_line.marks(&reference));
        out.extend(predicted_line.marks(&predicted));
        // Series end labels stand in for a legend.
        out.push(Mark::text(
            MarkId::from_raw(0x4030),
            z_order::ANNOTATIONS,
            TextMark::new(Point::new(plot.x1 - 2.0, sy.map(af_end) - 5.0), "Predicted")
                .with_font_size(8.0)
                .with_fill(palette.very_high)
                .with_anchor(TextAnchor::End),
        ));
        out.push(Mark::text(
            MarkId::from_raw(0x4031),
            z_order::ANNOTATIONS,
            TextMark::new(
                Point::new(plot.x1 - 2.0, sy.map(best_end) + 12.0),
                "Best template",
            )
            .with_font_size(8.0)
            .with_fill(palette.medium)
            .with_anchor(TextAnchor::End),
        ));
        out
    })?;

    Ok(Panel {
        title: "Benchmark: Prediction vs Best Template".to_string(),
        surface,
        marks,
    })
}

fn calibration(palette: &Palette) -> Result<Panel, ChartError> {
    let surface = Size::new(300.0, 120.0);
    let insets = Insets::new(30.0, 12.0, 12.0, 26.0);

    let chart = strata_charts::ChartSpec::new(surface, insets)
        .with_title(strata_charts::TitleSpec::new(
            MarkId::from_raw(0x5300),
            "lDDT-Ca vs pLDDT",
            LabelStyle::new(palette.text, 9.0),
        ))
        .with_axis_left(
            AxisSpec::left(0x5100, (0.0, 100.0))
                .with_ticks([0.0, 50.0, 100.0])
                .with_tick_marks(false)
                .with_domain_line(false)
                .with_grid(grid(palette, true))
                .with_style(axis_style(palette, 7.0)),
        )
        .with_axis_bottom(
            AxisSpec::bottom(0x5200, (0.0, 100.0))
                .with_ticks([0.0, 50.0, 100.0])
                .with_tick_marks(false)
                .with_style(axis_style(palette, 7.0))
                .with_title("pLDDT"),
        );

    let plot = chart.plot()?;
    let sx = ScaleLinear::try_new((0.0, 100.0), (plot.x0, plot.x1))?;
    let sy = ScaleLinear::try_new((0.0, 100.0), (plot.y1, plot.y0))?;

    let mean = XySeries::from_pairs(data::CALIBRATION_CURVE)?;
    let identity = XySeries::from_pairs(&[(0.0, 0.0), (100.0, 100.0)])?;

    let mean_line = LineMarkSpec::new(MarkId::from_raw(0x5000), sx, sy)
        .with_stroke(StrokeStyle::solid(palette.high, 2.0))
        .with_markers(2.5, palette.high);
    let identity_line = LineMarkSpec::new(MarkId::from_raw(0x5010), sx, sy).with_stroke(
        StrokeStyle::dashed(palette.muted.with_alpha(0.6), 1.0, 4.0, 3.0),
    );

    let (_, marks) = chart.marks(|_| {
        let mut out = identity_line.marks(&identity);
        out.extend(mean_line.marks(&mean));
        out
    })?;

    Ok(Panel {
        title: "Confidence Calibration".to_string(),
        surface,
        marks,
    })
}

fn rotamer_accuracy(palette: &Palette) -> Result<Panel, ChartError> {
    let surface = Size::new(300.0, 110.0);
    let insets = Insets::new(28.0, 12.0, 12.0, 28.0);

    let chart = strata_charts::ChartSpec::new(surface, insets)
        .with_axis_left(
            AxisSpec::left(0x6100, (50.0, 100.0))
                .with_ticks([60.0, 70.0, 80.0, 90.0, 100.0])
                .with_tick_marks(false)
                .with_domain_line(false)
                .with_grid(grid(palette, false))
                .with_style(axis_style(palette, 7.0))
                .with_tick_formatter(|v, _| format!("{v:.0}%")),
        )
        .with_axis_bottom(
            AxisSpec::bottom(0x6200, (20.0, 100.0))
                .with_ticks([20.0, 40.0, 60.0, 70.0, 80.0, 90.0, 100.0])
                .with_tick_marks(false)
                .with_style(axis_style(palette, 7.0))
                .with_title("pLDDT"),
        );

    let plot = chart.plot()?;
    let sx = ScaleLinear::try_new((20.0, 100.0), (plot.x0, plot.x1))?;
    let sy = ScaleLinear::try_new((50.0, 100.0), (plot.y1, plot.y0))?;

    let curve = XySeries::from_pairs(data::ROTAMER_CURVE)?;
    let area = AreaMarkSpec::new(0x6000, sx, sy)
        .with_baseline(50.0)
        .with_fill(palette.high.with_alpha(0.125))
        .with_stroke(StrokeStyle::solid(palette.high, 2.0));

    let marker = RuleMarkSpec::vertical(MarkId::from_raw(0x6010), 90.0)
        .with_stroke(StrokeStyle::dashed(
            palette.very_high.with_alpha(0.5),
            1.0,
            3.0,
            3.0,
        ))
        .with_label("90 -> ~80% correct", LabelStyle::new(palette.very_high, 7.0));

    let (_, marks) = chart.marks(|plot| {
        let mut out = area.marks(&curve);
        out.extend(marker.marks(&sx, plot));
        out
    })?;

    Ok(Panel {
        title: "Side-Chain Rotamer Correctness".to_string(),
        surface,
        marks,
    })
}

fn heterotypic_contacts(palette: &Palette) -> Result<Panel, ChartError> {
    let surface = Size::new(320.0, 120.0);
    let insets = Insets::new(30.0, 12.0, 14.0, 30.0);

    let chart = strata_charts::ChartSpec::new(surface, insets)
        .with_axis_left(
            AxisSpec::left(0x7100, (20.0, 100.0))
                .with_ticks([30.0, 50.0, 70.0, 90.0])
                .with_tick_marks(false)
                .with_domain_line(false)
                .with_grid(grid(palette, true))
                .with_style(axis_style(palette, 7.0))
                .with_title("lDDT-Ca"),
        )
        .with_axis_bottom(
            AxisSpec::bottom(0x7200, (0.0, 1.0))
                .with_ticks(Vec::new())
                .with_domain_line(false)
                .with_style(axis_style(palette, 8.0))
                .with_title("% heterotypic contacts"),
        );

    let series = DataSeries::new(
        data::HETEROTYPIC_BINS
            .iter()
            .map(|&(bin, lddt)| Record::new(bin, lddt))
            .collect(),
    )?;

    let plot = chart.plot()?;
    let y_scale = ScaleLinear::try_new((20.0, 100.0), (plot.y1, plot.y0))?;
    let band = ScaleBand::new((plot.x0, plot.x1), series.len()).with_gap(4.0);

    let ramp = *palette;
    let bars = BarMarkSpec::new(0x7000, band, y_scale)
        .with_color(ColorRule::PerIndex(std::sync::Arc::new(move |i, len| {
            let frac = if len > 1 { i as f64 / (len - 1) as f64 } else { 0.0 };
            Brush::Solid(ramp.ramp(frac).with_alpha(0.75))
        })))
        .with_value_labels(muted_label(palette, 7.0))
        .with_category_labels(muted_label(palette, 6.5));

    let quality = RuleMarkSpec::horizontal(MarkId::from_raw(0x7300), 70.0).with_stroke(
        StrokeStyle::dashed(palette.very_high.with_alpha(0.5), 1.0, 4.0, 3.0),
    );

    let (_, marks) = chart.marks(|plot| {
        let mut out = bars.marks(&series);
        out.extend(quality.marks(&y_scale, plot));
        out
    })?;

    Ok(Panel {
        title: "Accuracy vs Cross-Chain Contacts".to_string(),
        surface,
        marks,
    })
}

fn novelty_coverage(palette: &Palette) -> Result<Panel, ChartError> {
    let zone_colors = [palette.very_high, palette.high, palette.medium, palette.low];
    let rows: Vec<(&str, f64, Option<f64>, Brush)> = data::NOVELTY_BINS
        .iter()
        .zip(zone_colors)
        .map(|(&(label, pct), color)| (label, pct, None, Brush::Solid(color.with_alpha(0.85))))
        .collect();
    let (surface, marks) = meter_rows(0x8000, palette, 100.0, &rows);
    Ok(Panel {
        title: "Confidence by Template Identity".to_string(),
        surface,
        marks,
    })
}

fn disorder_benchmark(palette: &Palette) -> Result<Panel, ChartError> {
    let colors = [palette.very_high, palette.high, palette.medium, palette.muted];
    let rows: Vec<(&str, f64, Option<f64>, Brush)> = data::DISORDER_AUC
        .iter()
        .zip(colors)
        .map(|(&(label, auc), color)| (label, auc, None, Brush::Solid(color.with_alpha(0.85))))
        .collect();
    let (surface, marks) = meter_rows(0x9000, palette, 1.0, &rows);
    Ok(Panel {
        title: "Disorder Prediction Benchmark (AUC)".to_string(),
        surface,
        marks,
    })
}

fn seq_length_mix(palette: &Palette) -> Result<Panel, ChartError> {
    const ROW_H: f64 = 28.0;
    let surface = Size::new(340.0, data::SEQ_LEN_BINS.len() as f64 * ROW_H + 4.0);
    let mut marks = Vec::new();

    for (i, &(bin, vhigh, high, med, low)) in data::SEQ_LEN_BINS.iter().enumerate() {
        let top = 4.0 + i as f64 * ROW_H;
        let base = 0xa000 + i as u64 * 10;

        marks.push(Mark::text(
            MarkId::from_raw(base + 8),
            z_order::AXIS_LABELS,
            TextMark::new(Point::new(0.0, top + 4.0), format!("{bin} aa"))
                .with_font_size(10.0)
                .with_fill(palette.text)
                .with_baseline(TextBaseline::Middle),
        ));

        let frame = Rect::new(0.0, top + 10.0, surface.width, top + 24.0);
        let segments = [
            (vhigh, Brush::Solid(palette.very_high.with_alpha(0.85))),
            (high, Brush::Solid(palette.high.with_alpha(0.85))),
            (med, Brush::Solid(palette.medium.with_alpha(0.85))),
            (low, Brush::Solid(palette.low.with_alpha(0.65))),
        ];
        marks.extend(FractionBarSpec::new(base).with_gap(1.0).marks(&segments, frame));
    }

    Ok(Panel {
        title: "Confidence Mix by Sequence Length".to_string(),
        surface,
        marks,
    })
}

fn case_confidence(palette: &Palette) -> Result<Panel, ChartError> {
    // Median pLDDT in front, active-site pLDDT as the comparison overlay.
    let rows: Vec<(&str, f64, Option<f64>, Brush)> = data::CASE_STUDIES
        .iter()
        .map(|&(name, median, active)| {
            (
                name,
                median,
                Some(active),
                Brush::Solid(palette.very_high.with_alpha(0.85)),
            )
        })
        .collect();
    let (surface, marks) = meter_rows(0xb000, palette, 100.0, &rows);
    Ok(Panel {
        title: "Case Study Confidence".to_string(),
        surface,
        marks,
    })
}

fn axis_style(palette: &Palette, label_size: f64) -> strata_charts::AxisStyle {
    strata_charts::AxisStyle {
        rule: StrokeStyle::solid(palette.border, 1.0),
        label: LabelStyle::new(palette.muted, label_size),
        title: LabelStyle::new(palette.muted, 8.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_builds() {
        let palette = Palette::dark();
        for tab in Tab::ALL {
            let panels = build(tab, &palette).expect("panel build should succeed");
            assert!(!panels.is_empty());
            for p in &panels {
                assert!(!p.marks.is_empty(), "{} produced no marks", p.title);
            }
        }
    }

    #[test]
    fn tm_panel_has_one_bar_per_bin() {
        let palette = Palette::dark();
        let panel = tm_score_distribution(&palette).unwrap();
        let bars = panel
            .marks
            .iter()
            .filter(|m| m.z_index == z_order::SERIES_FILL)
            .count();
        assert_eq!(bars, data::TM_SCORE_BINS.len());
    }

    #[test]
    fn panel_build_is_deterministic() {
        let palette = Palette::dark();
        let a = benchmark_curves(&palette).unwrap();
        let b = benchmark_curves(&palette).unwrap();
        assert_eq!(a.marks, b.marks);
    }
}
