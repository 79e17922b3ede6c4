// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashboard datasets.
//!
//! Everything here is a build-time literal; the engine has no opinion
//! about what the numbers mean. Values follow the human proteome
//! structure-prediction summary the dashboard presents.

/// Headline counters: `(target, label, suffix)`.
pub(crate) const HEADLINE_STATS: &[(f64, &str, &str)] = &[
    (98.5, "Proteins Covered", "%"),
    (58.0, "Confident Residues", "%"),
    (35.7, "Very High Conf.", "%"),
    (20_296.0, "Proteins Predicted", ""),
];

/// Confidence-band shares of all residues: `(band, percent)`.
pub(crate) const CONFIDENCE_BANDS: &[(&str, f64)] = &[
    ("pLDDT 90-100", 35.7),
    ("pLDDT 70-90", 22.3),
    ("pLDDT 50-70", 18.2),
    ("pLDDT 0-50", 23.8),
];

/// TM-score distribution over held-out long chains: `(bin, percent)`.
pub(crate) const TM_SCORE_BINS: &[(&str, f64)] = &[
    ("0.1-0.2", 2.0),
    ("0.2-0.3", 3.0),
    ("0.3-0.4", 5.0),
    ("0.4-0.5", 8.0),
    ("0.5-0.6", 12.0),
    ("0.6-0.7", 10.0),
    ("0.7-0.8", 20.0),
    ("0.8-0.9", 28.0),
    ("0.9+", 12.0),
];

/// First TM-score bin at or past the quality threshold.
pub(crate) const TM_THRESHOLD_INDEX: usize = 6;

/// Benchmark curves by template identity: `(range, predicted, best_template)`.
pub(crate) const BENCHMARK_BINS: &[(&str, f64, f64)] = &[
    ("30-40%", 91.0, 80.0),
    ("40-50%", 93.0, 83.0),
    ("50-60%", 91.0, 85.0),
    ("60-70%", 94.0, 88.0),
    ("70-80%", 95.0, 90.0),
    ("80-90%", 96.0, 93.0),
];

/// Side-chain rotamer correctness by confidence: `(plddt, percent)`.
pub(crate) const ROTAMER_CURVE: &[(f64, f64)] = &[
    (20.0, 55.0),
    (30.0, 57.0),
    (40.0, 59.0),
    (50.0, 62.0),
    (60.0, 65.0),
    (70.0, 70.0),
    (75.0, 74.0),
    (80.0, 77.0),
    (85.0, 80.0),
    (90.0, 84.0),
    (95.0, 90.0),
    (100.0, 97.0),
];

/// Predicted vs actual accuracy calibration: `(plddt, mean_lddt)`.
pub(crate) const CALIBRATION_CURVE: &[(f64, f64)] = &[
    (20.0, 22.0),
    (30.0, 30.0),
    (40.0, 40.0),
    (50.0, 50.0),
    (60.0, 60.0),
    (70.0, 70.0),
    (80.0, 80.0),
    (90.0, 90.0),
    (95.0, 95.0),
];

/// Accuracy vs cross-chain contact share: `(bin, lddt)`.
pub(crate) const HETEROTYPIC_BINS: &[(&str, f64)] = &[
    ("0-10%", 88.0),
    ("10-20%", 80.0),
    ("20-30%", 68.0),
    ("30-40%", 55.0),
    ("40-50%", 44.0),
    ("50-60%", 37.0),
    ("60-70%", 32.0),
    (">70%", 28.0),
];

/// Disorder-predictor benchmark: `(predictor, auc)`.
pub(crate) const DISORDER_AUC: &[(&str, f64)] = &[
    ("Exp. Resolved Head", 0.921),
    ("pLDDT (off-label)", 0.897),
    ("SPOT-Disorder2", 0.880),
    ("MobiDB-lite", 0.840),
];

/// Confident coverage by template identity: `(zone, percent)`.
pub(crate) const NOVELTY_BINS: &[(&str, f64)] = &[
    (">50% seq ID (safe template zone)", 72.0),
    ("30-50% seq ID (twilight zone)", 60.0),
    ("10-30% seq ID (dark zone)", 45.0),
    ("<10% seq ID (no template)", 30.0),
];

/// High-confidence coverage by GO term: `(term, confident, templated)`.
pub(crate) const GO_TERM_COVERAGE: &[(&str, f64, f64)] = &[
    ("Catalytic activity", 0.64, 0.38),
    ("Protein binding", 0.60, 0.35),
    ("Metal ion binding", 0.57, 0.33),
    ("Nucleic acid binding", 0.48, 0.28),
    ("Organelle membrane", 0.55, 0.22),
    ("Integral membrane", 0.50, 0.18),
    ("Plasma membrane", 0.52, 0.20),
    ("Cytosol", 0.63, 0.36),
];

/// Confidence mix by sequence length: `(bin, very_high, high, medium, low)`.
pub(crate) const SEQ_LEN_BINS: &[(&str, f64, f64, f64, f64)] = &[
    ("1-100", 42.0, 26.0, 14.0, 18.0),
    ("100-200", 39.0, 24.0, 17.0, 20.0),
    ("200-400", 37.0, 22.0, 18.0, 23.0),
    ("400-700", 35.0, 21.0, 19.0, 25.0),
    ("700-1000", 33.0, 20.0, 20.0, 27.0),
    ("1000-1500", 30.0, 19.0, 21.0, 30.0),
    ("1500-2700", 27.0, 18.0, 21.0, 34.0),
];

/// Case-study confidence: `(name, median_plddt, active_site_plddt)`.
pub(crate) const CASE_STUDIES: &[(&str, f64, f64)] = &[
    ("G6Pase-a", 95.5, 96.6),
    ("DGAT2", 95.9, 93.7),
    ("Wolframin", 81.7, 86.0),
];
