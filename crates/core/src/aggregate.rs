use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::types::{
    Distribution, DistributionSlice, LabeledComment, SentimentLabel, SentimentSummary, TrendPoint,
};

/// How the trend series treats days without comments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrendFill {
    /// Only days that have comments
    #[default]
    Sparse,
    /// Every day between the first and last comment, gaps as zero counts
    Continuous,
}

pub fn summarize(comments: &[LabeledComment]) -> SentimentSummary {
    comments
        .iter()
        .fold(SentimentSummary::default(), |mut summary, c| {
            match c.sentiment.label {
                SentimentLabel::Positive => summary.num_positive += 1,
                SentimentLabel::Negative => summary.num_negative += 1,
                SentimentLabel::Neutral => summary.num_neutral += 1,
            }
            summary
        })
}

/// Pie-chart slices in Positive, Negative, Neutral order
pub fn distribution(summary: &SentimentSummary) -> Distribution {
    let total = summary.total();
    let slices = SentimentLabel::ALL.map(|label| {
        let count = summary.count(label);
        let percent = if total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / total as f64
        };
        DistributionSlice {
            label,
            count,
            percent,
        }
    });
    Distribution { slices }
}

/// Per-day label counts (UTC days), oldest first
pub fn trend(comments: &[LabeledComment], fill: TrendFill) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<NaiveDate, TrendPoint> = BTreeMap::new();

    for c in comments {
        let day = c.comment.published_at.date_naive();
        let point = buckets.entry(day).or_insert_with(|| TrendPoint::empty(day));
        match c.sentiment.label {
            SentimentLabel::Positive => point.positive += 1,
            SentimentLabel::Negative => point.negative += 1,
            SentimentLabel::Neutral => point.neutral += 1,
        }
    }

    match fill {
        TrendFill::Sparse => buckets.into_values().collect(),
        TrendFill::Continuous => fill_gaps(buckets),
    }
}

fn fill_gaps(buckets: BTreeMap<NaiveDate, TrendPoint>) -> Vec<TrendPoint> {
    let (Some(&first), Some(&last)) = (buckets.keys().next(), buckets.keys().next_back()) else {
        return Vec::new();
    };

    let mut series = Vec::new();
    let mut day = first;
    while day <= last {
        series.push(
            buckets
                .get(&day)
                .copied()
                .unwrap_or_else(|| TrendPoint::empty(day)),
        );
        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => break,
        }
    }
    series
}
