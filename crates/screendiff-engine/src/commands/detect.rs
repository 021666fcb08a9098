//! Screen regression detection.
//!
//! For every screen the current and preview captures are read from the
//! artifact store, prefiltered, parsed, normalized with their own side's
//! context and compared. Screens whose normalized trees differ get a text
//! report and a structured dump written next to the captures:
//!
//! ```text
//! diff/<date>/<screen>.diff
//! diff/<date>/<screen>.diff.yaml
//! ```
//!
//! One screen failing never aborts the batch; its error is logged and kept
//! in the [`DetectionSummary`].

use crate::ports::{MarkupParser, TreeDiffer};
use crate::prefilter::strip_comments;
use chrono::{DateTime, Duration, Utc};
use screendiff_core::{
    log_op_end, log_op_error, log_op_start, normalize, tree_digest, DiffReport, EnvironmentConfig,
    ExError, IndentConfig, Node, Side,
};
use screendiff_core_types::RunId;
use screendiff_store::errors::invalid_date;
use screendiff_store::{ArtifactStore, Result, ScreenKey};
use std::time::Instant;
use tracing::{debug, info};

/// Indentation used for the `.diff` artifact.
const REPORT_INDENT: IndentConfig = IndentConfig::new(0, 2);

const JST_OFFSET_HOURS: i64 = 9;

/// What happened to one screen.
#[derive(Debug, Clone)]
pub enum ScreenOutcome {
    /// Normalized trees are equivalent; nothing was written.
    NoDiff,
    /// Differences were found and both artifacts were written.
    Diff {
        ops_len: usize,
        diff_key: String,
        yaml_key: String,
        report: String,
    },
    Failed { error: ExError },
}

#[derive(Debug, Clone)]
pub struct ScreenResult {
    pub screen: String,
    pub outcome: ScreenOutcome,
}

/// Per-screen outcomes of one detection run, in input order.
#[derive(Debug, Clone)]
pub struct DetectionSummary {
    pub run_id: RunId,
    pub date: String,
    pub results: Vec<ScreenResult>,
}

impl DetectionSummary {
    /// True when every screen was processed, with or without differences.
    pub fn all_succeeded(&self) -> bool {
        !self
            .results
            .iter()
            .any(|r| matches!(r.outcome, ScreenOutcome::Failed { .. }))
    }

    pub fn diff_count(&self) -> usize {
        self.diff_reports().len()
    }

    pub fn failures(&self) -> Vec<(&str, &ExError)> {
        self.results
            .iter()
            .filter_map(|r| match &r.outcome {
                ScreenOutcome::Failed { error } => Some((r.screen.as_str(), error)),
                _ => None,
            })
            .collect()
    }

    /// `(screen, report text)` for every screen with differences, ready for
    /// [`compose_notification`](crate::notify::compose_notification).
    pub fn diff_reports(&self) -> Vec<(&str, &str)> {
        self.results
            .iter()
            .filter_map(|r| match &r.outcome {
                ScreenOutcome::Diff { report, .. } => Some((r.screen.as_str(), report.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn outcome(&self, screen: &str) -> Option<&ScreenOutcome> {
        self.results
            .iter()
            .find(|r| r.screen == screen)
            .map(|r| &r.outcome)
    }
}

/// `YYYYMMDD` of `now` in Japan Standard Time (UTC+9, no DST).
pub fn date_in_jst(now: DateTime<Utc>) -> String {
    (now + Duration::hours(JST_OFFSET_HOURS))
        .format("%Y%m%d")
        .to_string()
}

/// Today's capture date as used in artifact keys.
pub fn today_in_jst() -> String {
    date_in_jst(Utc::now())
}

/// Detect differences between current and preview captures of `screens`.
///
/// ## Errors
///
/// `ERR_INVALID_INPUT` when `date` is not `YYYYMMDD`. Per-screen failures
/// are reported through [`ScreenOutcome::Failed`] instead.
pub fn detect_screen_diffs(
    store: &dyn ArtifactStore,
    parser: &dyn MarkupParser,
    differ: &dyn TreeDiffer,
    config: &EnvironmentConfig,
    date: &str,
    screens: &[&str],
) -> Result<DetectionSummary> {
    let run_id = RunId::new();
    log_op_start!(
        "detect_screen_diffs",
        run_id = %run_id,
        date = date,
        screens = screens.len()
    );
    let start = Instant::now();

    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        let err = invalid_date(date);
        log_op_error!(
            "detect_screen_diffs",
            err.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = %run_id
        );
        return Err(err);
    }

    let total = screens.len();
    let mut results = Vec::with_capacity(total);
    for (index, screen) in screens.iter().enumerate() {
        info!(
            run_id = %run_id,
            screen = *screen,
            "detecting diffs ({}/{})",
            index + 1,
            total
        );
        let outcome = detect_screen(store, parser, differ, config, date, screen, &run_id);
        results.push(ScreenResult {
            screen: screen.to_string(),
            outcome,
        });
    }

    let summary = DetectionSummary {
        run_id,
        date: date.to_string(),
        results,
    };
    log_op_end!(
        "detect_screen_diffs",
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = %summary.run_id,
        diffs = summary.diff_count(),
        failures = summary.failures().len()
    );
    Ok(summary)
}

fn detect_screen(
    store: &dyn ArtifactStore,
    parser: &dyn MarkupParser,
    differ: &dyn TreeDiffer,
    config: &EnvironmentConfig,
    date: &str,
    screen: &str,
    run_id: &RunId,
) -> ScreenOutcome {
    log_op_start!("detect_screen", run_id = %run_id, screen = screen);
    let start = Instant::now();

    match detect_screen_impl(store, parser, differ, config, date, screen) {
        Ok(outcome) => {
            let ops_len = match &outcome {
                ScreenOutcome::Diff { ops_len, .. } => *ops_len,
                _ => 0,
            };
            log_op_end!(
                "detect_screen",
                duration_ms = start.elapsed().as_millis() as u64,
                run_id = %run_id,
                screen = screen,
                ops_len = ops_len
            );
            outcome
        }
        Err(e) => {
            let error = if e.screen().is_some() {
                e
            } else {
                e.with_screen(screen)
            };
            log_op_error!(
                "detect_screen",
                error.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                run_id = %run_id,
                screen = screen
            );
            ScreenOutcome::Failed { error }
        }
    }
}

fn detect_screen_impl(
    store: &dyn ArtifactStore,
    parser: &dyn MarkupParser,
    differ: &dyn TreeDiffer,
    config: &EnvironmentConfig,
    date: &str,
    screen: &str,
) -> Result<ScreenOutcome> {
    let key = ScreenKey::new(date, screen)?;

    let current = load_tree(store, parser, config, &key, Side::Current)?;
    let preview = load_tree(store, parser, config, &key, Side::Preview)?;

    if tree_digest(&current)? == tree_digest(&preview)? {
        debug!(screen, "normalized trees are identical");
        return Ok(ScreenOutcome::NoDiff);
    }

    let operations = differ
        .diff(&current, &preview)
        .map_err(|e| e.with_op("diff").with_screen(screen))?;
    if operations.is_empty() {
        return Ok(ScreenOutcome::NoDiff);
    }

    let report = DiffReport::new(key.html(Side::Current), key.html(Side::Preview), operations);
    let text = report.render(REPORT_INDENT);
    let yaml = report.to_yaml()?;

    let diff_key = key.diff();
    let yaml_key = key.diff_yaml();
    store.write_text(&yaml_key, &yaml)?;
    store.write_text(&diff_key, &text)?;

    Ok(ScreenOutcome::Diff {
        ops_len: report.operations.len(),
        diff_key,
        yaml_key,
        report: text,
    })
}

/// Read, prefilter, parse and normalize one side's capture.
fn load_tree(
    store: &dyn ArtifactStore,
    parser: &dyn MarkupParser,
    config: &EnvironmentConfig,
    key: &ScreenKey,
    side: Side,
) -> Result<Node> {
    let raw = store
        .read_text(&key.html(side))
        .map_err(|e| e.with_side(side.as_str()))?;
    let mut tree = parser
        .parse(&strip_comments(&raw))
        .map_err(|e| e.with_op("parse").with_side(side.as_str()))?;
    normalize(&mut tree, &config.context(side));
    Ok(tree)
}
