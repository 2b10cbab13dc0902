// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Threshold matching of a probe print against stored prints.

use tracing::debug;

use crate::config::MatchConfig;
use crate::error::{PrintError, PrintResult};
use crate::print::PrintRecord;
use crate::types::{MinutiaTemplate, PrintKind};

/// Minutiae comparison primitive (e.g. BOZORTH3).
pub trait Scorer {
    /// Probe prepared for repeated comparison.
    type Probe;

    fn probe_init(&self, probe: &MinutiaTemplate) -> Self::Probe;

    /// Similarity of the prepared probe to one gallery template; higher is more similar.
    fn score(&self, probe: &Self::Probe, gallery: &MinutiaTemplate) -> i32;
}

/// Result of a completed comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchOutcome {
    Success,
    Fail,
}

/// Compares template-set prints using a `Scorer` and a score threshold.
#[derive(Clone, Debug)]
pub struct Matcher<S> {
    scorer: S,
    config: MatchConfig,
}

impl<S: Scorer> Matcher<S> {
    pub fn new(scorer: S, config: MatchConfig) -> Self {
        Self { scorer, config }
    }

    pub fn with_threshold(scorer: S, threshold: i32) -> Self {
        Self::new(scorer, MatchConfig { threshold })
    }

    pub fn threshold(&self) -> i32 {
        self.config.threshold
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Matches a freshly captured `probe` holding exactly one template
    /// against every template of the enrolled `gallery` print, in storage
    /// order, stopping at the first score that reaches the threshold.
    pub fn verify(&self, gallery: &PrintRecord, probe: &PrintRecord) -> PrintResult<MatchOutcome> {
        let (gallery_templates, probe_templates) = match (gallery.templates(), probe.templates()) {
            (Some(g), Some(p)) => (g, p),
            _ => {
                return Err(PrintError::NotSupported(format!(
                    "can only match template set prints, got {:?} and {:?}",
                    gallery.kind(),
                    probe.kind()
                )))
            }
        };

        let probe_template = match probe_templates {
            [template] => template,
            _ => {
                return Err(PrintError::General(format!(
                    "new print must contain exactly one template, found {}",
                    probe_templates.len()
                )))
            }
        };

        let prepared = self.scorer.probe_init(probe_template);
        for (i, template) in gallery_templates.iter().enumerate() {
            let score = self.scorer.score(&prepared, template);
            debug!(template = i, score, threshold = self.config.threshold, "match score");
            if score >= self.config.threshold {
                return Ok(MatchOutcome::Success);
            }
        }
        Ok(MatchOutcome::Fail)
    }

    /// Returns the index of the first candidate that `probe` verifies against.
    ///
    /// Candidates that are not template sets are skipped.
    pub fn identify(&self, candidates: &[PrintRecord], probe: &PrintRecord) -> PrintResult<Option<usize>> {
        if probe.kind() != PrintKind::TemplateSet {
            return Err(PrintError::NotSupported(format!("cannot identify a {:?} print", probe.kind())));
        }
        for (i, candidate) in candidates.iter().enumerate() {
            if candidate.kind() != PrintKind::TemplateSet {
                continue;
            }
            if self.verify(candidate, probe)? == MatchOutcome::Success {
                return Ok(Some(i));
            }
        }
        Ok(None)
    }
}
