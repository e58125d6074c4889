use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rayon::prelude::*;

use kira_aesthetics::gallery::fetch::FileFetcher;
use kira_aesthetics::gallery::source::DirectorySource;
use kira_aesthetics::gallery::topics::{
    DEFAULT_LIMIT, FASHION_TOPICS, parse_custom_topics, select_topics,
};
use kira_aesthetics::gallery::{GalleryError, TopicGallery, TopicSection};
use kira_aesthetics::input::{InputError, discover_images, load_bytes};
use kira_aesthetics::report::text::render_scores_tsv;
use kira_aesthetics::report::{ImageScore, ReportError, format_f64_3, write_reports};
use kira_aesthetics::{AestheticScorer, ScoreReport, logging, simd};

#[derive(Debug, Parser)]
#[command(name = "kira-aesthetics", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score image files or directories of images.
    Score {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Write scores.tsv, scores.jsonl, summary.json and report.txt here instead of printing.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Load topic folders under a root directory, optionally ranked by score.
    Gallery {
        #[arg(long)]
        root: PathBuf,
        /// Comma separated topics.
        #[arg(long, default_value = "")]
        topics: String,
        /// Include the predefined topic list.
        #[arg(long)]
        predefined: bool,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
        /// Rank each topic by aesthetic score.
        #[arg(long)]
        score: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Gallery(#[from] GalleryError),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::info!(backend = simd::backend_name(), "SIMD backend");
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), CliError> {
    let scorer = AestheticScorer::new();
    match command {
        Command::Score { inputs, out } => {
            let paths = discover_images(&inputs)?;
            let entries = score_paths(&scorer, &paths);
            match out {
                Some(dir) => write_reports(&entries, scorer.profile(), &dir)?,
                None => print!("{}", render_scores_tsv(&entries)),
            }
        }
        Command::Gallery {
            root,
            topics,
            predefined,
            limit,
            score,
        } => {
            let picks: &[&str] = if predefined { FASHION_TOPICS } else { &[] };
            let selected = select_topics(picks, &parse_custom_topics(&topics));
            let mut gallery = local_gallery(root, scorer);
            let sections = gallery.load_all(&selected, limit, score)?;
            print!("{}", render_sections(&sections));
        }
    }
    Ok(())
}

/// Source paths already carry `root`, so the fetcher reads them as given.
fn local_gallery(
    root: PathBuf,
    scorer: AestheticScorer,
) -> TopicGallery<DirectorySource, FileFetcher> {
    TopicGallery::new(DirectorySource { root }, FileFetcher::default(), scorer)
}

fn score_paths(scorer: &AestheticScorer, paths: &[PathBuf]) -> Vec<ImageScore> {
    paths
        .par_iter()
        .map(|path| {
            let name = path.display().to_string();
            let result = load_bytes(path)
                .map_err(|e| e.to_string())
                .and_then(|bytes| scorer.evaluate(&bytes).map_err(|e| e.to_string()));
            match result {
                Ok(report) => ImageScore {
                    name,
                    decoded: true,
                    report,
                    error: None,
                },
                Err(err) => {
                    tracing::warn!(image = %name, error = %err, "scored as 0");
                    ImageScore {
                        name,
                        decoded: false,
                        report: ScoreReport::zero(),
                        error: Some(err),
                    }
                }
            }
        })
        .collect()
}

fn render_sections(sections: &[TopicSection]) -> String {
    let mut out = String::new();
    for section in sections {
        out.push_str(&format!("# {}\n", section.topic));
        if section.items.is_empty() {
            out.push_str("(no images)\n");
        }
        for (i, item) in section.items.iter().enumerate() {
            match item.score {
                Some(s) => out.push_str(&format!(
                    "{}\t{}\tscore: {}\n",
                    i + 1,
                    item.url,
                    format_f64_3(s)
                )),
                None => out.push_str(&format!("{}\t{}\n", i + 1, item.url)),
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
