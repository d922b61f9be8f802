use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use sentitube_core::{
    AnalysisReport, Analyzer, AnalyzerConfig, ApiConfig, SentitubeError, Stage, TrendFill,
    YoutubeClient, default_export_dir, format_report_readable, owned_export_dir,
};

mod logging;

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", (secs / 60.0).floor(), secs % 60.0)
    }
}

#[derive(Parser)]
#[command(name = "sentitube")]
#[command(about = "Fetch YouTube comments and report their sentiment")]
struct Cli {
    /// Video URL (watch, youtu.be, embed, shorts) or bare video id
    url: String,

    /// Base directory for CSV exports; they go into a `sentitube-exports`
    /// subdirectory. Defaults to the user cache directory.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Stop after this many comments
    #[arg(short, long)]
    limit: Option<usize>,

    /// Include days without comments in the trend, as zero rows
    #[arg(short, long)]
    continuous: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Keep exports of previously analyzed videos
    #[arg(long)]
    keep_exports: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn done(step: &str) -> String {
    format!("{} {}", style("✓").green().bold(), step)
}

fn fail(err: &SentitubeError) -> ! {
    eprintln!("{} {}", style("Error:").red().bold(), err.user_message());
    tracing::debug!(error = %err, "run failed");
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    // Validate API key early
    let api_config = ApiConfig::from_env().unwrap_or_else(|e| fail(&e));
    let client = YoutubeClient::new(api_config)?;

    let config = AnalyzerConfig {
        output_dir: cli
            .output_dir
            .as_deref()
            .map(owned_export_dir)
            .unwrap_or_else(default_export_dir),
        max_comments: cli.limit,
        trend_fill: if cli.continuous {
            TrendFill::Continuous
        } else {
            TrendFill::Sparse
        },
        retain_only_current: !cli.keep_exports,
    };
    let analyzer = Analyzer::new(client, config);

    if cli.json {
        let report = analyzer.run(&cli.url).await.unwrap_or_else(|e| fail(&e));
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "\n{}  {}\n",
        style("sentitube").cyan().bold(),
        style("Comment Sentiment Analyzer").dim()
    );

    let total_start = Instant::now();
    let spinner = create_spinner("Resolving video link...");
    let report = analyzer
        .run_with_progress(&cli.url, |stage| report_stage(&spinner, stage))
        .await;

    let report: AnalysisReport = match report {
        Ok(report) => report,
        Err(e) => {
            spinner.finish_and_clear();
            fail(&e);
        }
    };
    spinner.finish_and_clear();

    println!(
        "\n{} {}",
        style("Total time:").dim(),
        style(format_duration(total_start.elapsed())).cyan().bold()
    );
    println!(
        "{} {}\n",
        style("Saved:").dim(),
        style(report.export_path.display()).cyan()
    );
    println!("{}", style("─".repeat(60)).dim());

    // Human-readable output
    let readable = format_report_readable(&report);
    println!("{}", readable);

    Ok(())
}

fn report_stage(spinner: &ProgressBar, stage: Stage<'_>) {
    match stage {
        Stage::Resolved(video_id) => {
            spinner.println(done(&format!("Video id: {}", style(video_id).yellow())));
            spinner.set_message("Fetching video details...");
        }
        Stage::VideoFetched(video) => {
            spinner.println(done(&format!("Video: {}", style(&video.title).dim())));
            spinner.set_message("Fetching channel details...");
        }
        Stage::ChannelFetched(channel) => {
            spinner.println(done(&format!("Channel: {}", style(&channel.title).dim())));
            spinner.set_message("Fetching comments...");
        }
        Stage::CommentsFetched { count, truncated } => {
            let note = if truncated { " (limit reached)" } else { "" };
            spinner.println(done(&format!("Fetched {} comments{}", count, note)));
            spinner.set_message("Analyzing sentiment...");
        }
        Stage::Classified(summary) => {
            spinner.println(done(&format!(
                "Classified: {} positive, {} negative, {} neutral",
                style(summary.num_positive).green(),
                style(summary.num_negative).red(),
                style(summary.num_neutral).yellow()
            )));
            spinner.set_message("Writing export...");
        }
        Stage::Exported(_) => {
            spinner.println(done("Comments saved to CSV"));
        }
    }
}
