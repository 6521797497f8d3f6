use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, error, info};

use super::client::HttpAnalysisClient;
use super::submit::{run_submission, SubmissionOutcome};
use crate::models::prelude::{AnalysisRequest, Genre, Mood, Section};
use crate::report::prelude::HtmlReport;
use crate::shared::prelude::{FoundConfig, PresentationController, SpinnerIndicator};

/// Built-in lyrics used when `--sample` is passed, for trying the tool
/// without a file at hand.
pub const SAMPLE_LYRICS: &str = "Verse:
City lights hum, I'm a flicker in the rain,
Echoes in the alley keep repeating your name.
Chorus:
Hold me like the sky holds the neon tight,
I'm breaking but I'm burning, you're my afterlight.";

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// File containing the lyrics to analyze. Use `-` to read from stdin.
    #[arg(default_value = "-")]
    lyrics: String,

    /// Analyze the built-in sample lyrics instead of reading input.
    #[arg(long, conflicts_with = "lyrics")]
    sample: bool,

    /// How adventurous the suggestions should be, from 0 (safe) to 100 (wild).
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
    tone: u8,

    /// The song section the lyrics belong to.
    #[arg(long, value_enum, default_value = "verse")]
    section: Section,

    /// The mood the lyrics aim for.
    #[arg(long, value_enum, default_value = "heartbreak")]
    mood: Mood,

    /// The genre the lyrics are written in.
    #[arg(long, value_enum, default_value = "pop")]
    genre: Genre,

    /// Where the rendered report is written. Defaults to a run-id named file
    /// in the working directory.
    #[arg(long, short = 'o')]
    report_location: Option<String>,
}

pub async fn analyze_root(found_config: &FoundConfig, args: &AnalyzeArgs) -> Result<i32> {
    let raw_lyrics = read_lyrics(args)?;

    let request = match AnalysisRequest::build(
        &raw_lyrics,
        args.tone,
        args.section,
        args.mood,
        args.genre,
    ) {
        Ok(request) => request,
        Err(e) => {
            error!(target: "user", "{}", e);
            return Ok(2);
        }
    };

    let backend = HttpAnalysisClient::new(found_config.endpoint.clone());
    let controller = PresentationController::new(Box::new(SpinnerIndicator::new(
        "Waiting for the analysis endpoint",
    )));
    let mut report = HtmlReport::default();

    match run_submission(&request, &backend, &controller, &mut report).await {
        Ok(SubmissionOutcome::BackendError(message)) => {
            error!(target: "user", "The analysis endpoint reported an error: {}", message);
            Ok(1)
        }
        Ok(SubmissionOutcome::Rendered) => {
            let title = format!("Versecheck critique: {} / {} / {}", args.section, args.mood, args.genre);
            let path = report_path(found_config, args);
            report.write_to(&path, &title)?;
            info!(target: "always", "Report was created at {}", path.display());
            Ok(0)
        }
        Err(e) => {
            debug!("transport failure: {:?}", e);
            error!(target: "user", "{}", e);
            Ok(3)
        }
    }
}

fn read_lyrics(args: &AnalyzeArgs) -> Result<String> {
    if args.sample {
        return Ok(SAMPLE_LYRICS.to_string());
    }

    if args.lyrics == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("unable to read lyrics from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(&args.lyrics)
            .with_context(|| format!("unable to read lyrics from {}", args.lyrics))
    }
}

fn report_path(found_config: &FoundConfig, args: &AnalyzeArgs) -> PathBuf {
    match &args.report_location {
        Some(location) => PathBuf::from(location),
        None => found_config
            .working_dir
            .join(format!("versecheck-report-{}.html", found_config.run_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_lyrics_are_not_empty_after_trimming() {
        assert!(!SAMPLE_LYRICS.trim().is_empty());
    }

    #[test]
    fn report_path_prefers_the_explicit_location() {
        let found_config = FoundConfig {
            endpoint: url::Url::parse("http://127.0.0.1:5000/analyze").unwrap(),
            working_dir: PathBuf::from("/work"),
            run_id: "20260807-abcd".to_string(),
        };
        let args = AnalyzeArgs {
            lyrics: "-".to_string(),
            sample: false,
            tone: 50,
            section: Section::Verse,
            mood: Mood::Heartbreak,
            genre: Genre::Pop,
            report_location: Some("/tmp/out.html".to_string()),
        };

        assert_eq!(report_path(&found_config, &args), PathBuf::from("/tmp/out.html"));
    }

    #[test]
    fn report_path_defaults_to_a_run_id_named_file() {
        let found_config = FoundConfig {
            endpoint: url::Url::parse("http://127.0.0.1:5000/analyze").unwrap(),
            working_dir: PathBuf::from("/work"),
            run_id: "20260807-abcd".to_string(),
        };
        let args = AnalyzeArgs {
            lyrics: "-".to_string(),
            sample: false,
            tone: 50,
            section: Section::Verse,
            mood: Mood::Heartbreak,
            genre: Genre::Pop,
            report_location: None,
        };

        assert_eq!(
            report_path(&found_config, &args),
            PathBuf::from("/work/versecheck-report-20260807-abcd.html")
        );
    }
}
