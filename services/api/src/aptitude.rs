use atomik::config::AptitudeConfig;
use atomik::error::AppError;
use atomik::workflows::aptitude::{AptitudeScore, AptitudeScorer};
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Comma separated answers in question order (e.g. 2,1,3,2,4)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub(crate) answers: Vec<i64>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AptitudeConfig::from_env()?;
    let scorer = AptitudeScorer::new(config.answer_key);
    let outcome = scorer.score(&args.answers);

    println!("{}", render_score(&scorer, &args.answers, outcome, args.json));
    Ok(())
}

fn render_score(
    scorer: &AptitudeScorer,
    answers: &[i64],
    outcome: AptitudeScore,
    json: bool,
) -> String {
    if json {
        return serde_json::json!({
            "score": outcome.score,
            "status": outcome.status,
        })
        .to_string();
    }

    let key = scorer.key();
    let compared = answers.len().min(key.len());
    let mut lines = vec![
        format!("Score: {}/{}", outcome.score, key.len()),
        format!("Status: {}", outcome.status),
    ];

    if answers.len() > key.len() {
        lines.push(format!(
            "Ignored {} answer(s) beyond question {}",
            answers.len() - key.len(),
            key.len()
        ));
    } else if compared < key.len() {
        lines.push(format!("Unanswered questions: {}", key.len() - compared));
    }

    lines.join("\n")
}
