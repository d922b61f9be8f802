use crate::types::{AnalysisReport, Distribution, TrendPoint};

const BAR_WIDTH: usize = 30;

/// Format a count with thousands separators, e.g. 1,234,567
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn format_optional_count(value: Option<u64>) -> String {
    value.map(format_count).unwrap_or_else(|| "hidden".to_string())
}

/// Horizontal bar proportional to `percent`
pub fn percent_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn format_distribution(distribution: &Distribution) -> String {
    distribution
        .slices
        .iter()
        .map(|slice| {
            format!(
                "{:<9} {} {:>5.1}% ({})",
                slice.label.title(),
                percent_bar(slice.percent, BAR_WIDTH),
                slice.percent,
                slice.count
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One row per bucket: date, then positive / negative / neutral counts
pub fn format_trend(trend: &[TrendPoint]) -> String {
    if trend.is_empty() {
        return "No comments to chart.".to_string();
    }

    let mut output = format!(
        "{:<10}  {:>8}  {:>8}  {:>8}\n",
        "Date", "Positive", "Negative", "Neutral"
    );
    for point in trend {
        output.push_str(&format!(
            "{:<10}  {:>8}  {:>8}  {:>8}\n",
            point.bucket.format("%Y-%m-%d").to_string(),
            point.positive,
            point.negative,
            point.neutral
        ));
    }
    output
}

/// Format an analysis report as human-readable markdown
pub fn format_report_readable(report: &AnalysisReport) -> String {
    let mut output = String::new();
    let channel = &report.channel;
    let video = &report.video;

    // Channel overview
    output.push_str("## Channel Overview\n\n");
    output.push_str(&format!("### {}\n\n", channel.title));
    if let Some(created) = channel.created_at {
        output.push_str(&format!("**Created:** {}\n", created.format("%Y-%m-%d")));
    }
    output.push_str(&format!(
        "**Subscribers:** {}\n",
        format_optional_count(channel.subscriber_count)
    ));
    output.push_str(&format!(
        "**Total Videos:** {}\n",
        format_optional_count(channel.video_count)
    ));
    if let Some(logo) = &channel.logo_url {
        output.push_str(&format!("**Logo:** {}\n", logo));
    }
    output.push('\n');

    // Video overview
    output.push_str("## Video Overview\n\n");
    output.push_str(&format!("**{}**\n", video.title));
    output.push_str(&format!("{}\n\n", report.video_id.watch_url()));
    output.push_str(&format!(
        "**Views:** {} | **Likes:** {} | **Comments:** {}\n\n",
        format_optional_count(video.view_count),
        format_optional_count(video.like_count),
        format_optional_count(video.comment_count)
    ));

    // Sentiment counts
    output.push_str("## Sentiment Analysis\n\n");
    output.push_str(&format!(
        "Positive: {} | Negative: {} | Neutral: {}\n",
        report.summary.num_positive, report.summary.num_negative, report.summary.num_neutral
    ));
    output.push_str(&format!("Analyzed {} comments", report.comment_count));
    if report.truncated {
        output.push_str(" (limit reached, more comments exist)");
    }
    output.push_str("\n\n");

    output.push_str("## Sentiment Distribution\n\n");
    output.push_str(&format_distribution(&report.distribution));
    output.push_str("\n\n");

    output.push_str("## Sentiment Over Time\n\n");
    output.push_str(&format_trend(&report.trend));
    output.push('\n');

    if !channel.description.trim().is_empty() {
        output.push_str("## Channel Description\n\n");
        output.push_str(channel.description.trim());
        output.push('\n');
    }

    output
}
