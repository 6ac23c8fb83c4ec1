use clap::Args;
use reflectiv::error::AppError;
use reflectiv::scoring::{score_conversation, MetricResult, MetricResultView};
use reflectiv::transcript::{read_transcript, Turn};
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Transcript CSV export with Speaker,Text columns
    #[arg(long)]
    pub(crate) transcript: PathBuf,
    /// Emit the full result payload as JSON instead of the summary table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit the full result payload as JSON instead of the summary table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { transcript, json } = args;

    let file = File::open(&transcript)?;
    let turns = read_transcript(file)?;
    let results = score_conversation(&turns);

    println!(
        "Scored {} turn(s) from {}",
        turns.len(),
        transcript.display()
    );
    render_results(&results, json);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let turns = demo_conversation();
    let results = score_conversation(&turns);

    println!("Roleplay scoring demo ({} turns)", turns.len());
    for turn in &turns {
        println!("  {:>8}: {}", turn.speaker.label(), turn.text);
    }
    println!();
    render_results(&results, args.json);
    Ok(())
}

fn render_results(results: &[MetricResult], as_json: bool) {
    if as_json {
        let views: Vec<MetricResultView> = results.iter().map(MetricResultView::from).collect();
        match serde_json::to_string_pretty(&views) {
            Ok(payload) => println!("{payload}"),
            Err(err) => eprintln!("failed to render results: {err}"),
        }
        return;
    }

    for result in results {
        let score = match result.overall_score {
            Some(score) => format!("{score:.1}"),
            None => "n/a".to_string(),
        };
        println!("{:<34} {:>4}", result.id.label(), score);
        for component in &result.components {
            println!("    - {:<28} {}", component.name, component.outcome.rationale());
        }
    }
}

fn demo_conversation() -> Vec<Turn> {
    vec![
        Turn::rep("Today I would like to discuss your needs. What are your goals?"),
        Turn::customer("We need to improve patient outcomes and reduce costs."),
        Turn::rep("So you are saying you want to improve outcomes. Tell me more about that."),
        Turn::customer("Yes, we struggle with adherence."),
        Turn::rep(
            "I understand. Our solution can help you increase adherence so that you see better outcomes.",
        ),
        Turn::customer("That sounds good. What are the next steps?"),
        Turn::rep(
            "I will send you a proposal by Friday. You can review it and we will schedule a follow-up next week.",
        ),
        Turn::customer("Yes, that works for me."),
    ]
}
