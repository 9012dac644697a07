//! Markdown recommendation report.
//!
//! Renders the outcome of an evaluation as a deterministic markdown
//! document: evaluation summary, ranked finalists, optional TCO comparison
//! table, and an elimination appendix. Given the same results, the output is
//! byte-identical; timestamps and any other non-determinism stay out.

use std::fmt::Write as _;

use crate::domain::cost::TcoProjection;
use crate::domain::filtering::FilterResult;
use crate::domain::scoring::ScoreResult;

/// Builder for the markdown recommendation report.
pub struct MarkdownReport<'a> {
    filter: &'a FilterResult,
    scores: Option<&'a ScoreResult>,
    projections: &'a [TcoProjection],
}

impl<'a> MarkdownReport<'a> {
    pub fn new(filter: &'a FilterResult) -> Self {
        Self {
            filter,
            scores: None,
            projections: &[],
        }
    }

    pub fn with_scores(mut self, scores: &'a ScoreResult) -> Self {
        self.scores = Some(scores);
        self
    }

    pub fn with_projections(mut self, projections: &'a [TcoProjection]) -> Self {
        self.projections = projections;
        self
    }

    /// Renders the full document.
    pub fn render(&self) -> String {
        let mut doc = String::new();

        doc.push_str("# Vendor Evaluation Report\n\n");
        self.render_summary(&mut doc);
        if let Some(scores) = self.scores {
            render_ranking(&mut doc, scores);
        }
        if !self.projections.is_empty() {
            render_tco_table(&mut doc, self.projections);
        }
        self.render_eliminations(&mut doc);

        doc
    }

    fn render_summary(&self, doc: &mut String) {
        doc.push_str("## Summary\n\n");
        let _ = writeln!(doc, "- Vendors evaluated: {}", self.filter.initial_count);
        let _ = writeln!(doc, "- Viable after filtering: {}", self.filter.filtered_count());
        let _ = writeln!(doc, "- Eliminated: {}", self.filter.eliminated_count());
        if let Some(scores) = self.scores {
            let _ = writeln!(doc, "- Scoring: {}", scores.summary());
        }
        doc.push('\n');
    }

    fn render_eliminations(&self, doc: &mut String) {
        if self.filter.eliminated().is_empty() {
            return;
        }

        doc.push_str("## Appendix: Eliminated Vendors\n\n");
        for (vendor_id, reason) in self.filter.eliminated() {
            let _ = writeln!(doc, "- **{}**: {}", vendor_id, reason);
        }
        doc.push('\n');
    }
}

fn render_ranking(doc: &mut String, scores: &ScoreResult) {
    doc.push_str("## Ranked Finalists\n\n");
    doc.push_str("| Rank | Vendor | Score | Fit |\n");
    doc.push_str("|------|--------|-------|-----|\n");
    for (rank, scored) in scores.ranked().iter().enumerate() {
        let _ = writeln!(
            doc,
            "| {} | {} | {}/{} | {:.1}% |",
            rank + 1,
            scored.vendor_name,
            scored.score,
            scored.max_score,
            scored.score_percentage()
        );
    }
    doc.push('\n');
}

fn render_tco_table(doc: &mut String, projections: &[TcoProjection]) {
    doc.push_str("## 5-Year TCO Comparison\n\n");
    doc.push_str("| Vendor | Year 1 | 5-Year Total |\n");
    doc.push_str("|--------|--------|--------------|\n");
    for projection in projections {
        let _ = writeln!(
            doc,
            "| {} | ${:.0}K | ${:.0}K |",
            projection.vendor_name,
            projection.year1_cost / 1000.0,
            projection.year5_total / 1000.0
        );
    }
    doc.push('\n');

    let warned: Vec<&TcoProjection> = projections
        .iter()
        .filter(|p| !p.warnings.is_empty())
        .collect();
    if !warned.is_empty() {
        doc.push_str("### Cost Risks\n\n");
        for projection in warned {
            for warning in &projection.warnings {
                let _ = writeln!(doc, "- {}: {}", projection.vendor_name, warning);
            }
        }
        doc.push('\n');
    }
}
