use std::io::{stdin, stdout, Write};

use clap::Parser;
use ethic_assessment::bank::{Item, LIKERT_RANGE, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use ethic_assessment::{
    evaluate, ranked, telemetry, AnswerStore, Error, Results, ScoreBand, SectionId, WiscarLevel,
    QUESTIONS,
};

const LIKERT_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

/// Interactive E.T.H.I.C. career-readiness assessment.
#[derive(Parser)]
struct Args {
    /// Print the results as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    telemetry::init("warn")?;

    let mut store = AnswerStore::default();
    for section in SectionId::ALL {
        println!("== {} ==", QUESTIONS.title(section));
        if section == SectionId::Wiscar {
            ask_wiscar(&mut store)?;
            continue;
        }
        for subscale in QUESTIONS.subscales(section) {
            println!("-- {} --", subscale.title);
            println!("{}", subscale.description);
            for question in &subscale.questions {
                println!();
                println!("{}", question.text);
                if question.is_multiple_choice() {
                    for (index, option) in question.options.iter().enumerate() {
                        println!("  {} => {}", index + 1, option);
                    }
                } else {
                    for (value, label) in LIKERT_RANGE.zip(LIKERT_LABELS) {
                        print!("  {} => {}", value, label);
                    }
                    println!();
                }
                ask(&mut store, section, question.id)?;
            }
        }
        println!();
    }

    let data = store.submit()?;
    let results = evaluate(Some(&data))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results);
    }
    Ok(())
}

fn ask_wiscar(store: &mut AnswerStore) -> Result<(), Error> {
    for dimension in &QUESTIONS.wiscar.dimensions {
        println!();
        println!("{}", dimension.title);
        println!("{}", dimension.description);
        for scenario in &dimension.scenarios {
            println!("  - {}", scenario);
        }
        println!(
            "Rate yourself from {} to {} in steps of {}.",
            SLIDER_MIN, SLIDER_MAX, SLIDER_STEP
        );
        ask(store, SectionId::Wiscar, dimension.id)?;
        if let Some(value) = store.snapshot(SectionId::Wiscar).get(dimension.id) {
            println!("  {}", WiscarLevel::of(value).label());
        }
    }
    Ok(())
}

/// Reads lines until the question accepts one.
fn ask(store: &mut AnswerStore, section: SectionId, question: u32) -> Result<(), Error> {
    let mut buffer = String::new();
    loop {
        print!("> ");
        stdout().flush()?;
        buffer.clear();
        if stdin().read_line(&mut buffer)? == 0 {
            return Err(Error::NotFulfilled(section));
        }
        match store_answer(buffer.trim(), store, section, question) {
            Ok(()) => return Ok(()),
            Err(_) => println!("{}", hint(section, question)),
        }
    }
}

fn store_answer(
    value: &str,
    store: &mut AnswerStore,
    section: SectionId,
    question: u32,
) -> Result<(), Error> {
    let mut value = value.parse::<f64>().map_err(|_| Error::IllegalAnswer {
        section,
        question,
        value: f64::NAN,
    })?;
    // options are shown 1-based
    if let Some(Item::Choice(_)) = QUESTIONS.item(section, question) {
        value -= 1.0;
    }
    store.record_answer(section, question, value)
}

fn hint(section: SectionId, question: u32) -> String {
    match QUESTIONS.item(section, question) {
        Some(Item::Likert(_)) => format!(
            "Please answer with a whole number from {} to {}.",
            LIKERT_RANGE.start(),
            LIKERT_RANGE.end()
        ),
        Some(Item::Choice(choice)) => {
            format!("Please pick an option from 1 to {}.", choice.options.len())
        }
        Some(Item::Slider(_)) => format!(
            "Please answer from {} to {} in steps of {}.",
            SLIDER_MIN, SLIDER_MAX, SLIDER_STEP
        ),
        None => String::new(),
    }
}

fn print_results(results: &Results) {
    let scores = &results.scores;
    let recommendation = &results.recommendation;

    println!("Overall Readiness: {}%", scores.overall);
    println!("{}", recommendation.headline.summary);
    println!();
    for (title, score) in [
        ("Psychological Fit", scores.psychological),
        ("Technical Readiness", scores.technical),
        ("Career Alignment", scores.career),
    ] {
        println!("{:<20} {:>3}%  {}", title, score, ScoreBand::of(score).label());
    }

    println!();
    println!("{}", recommendation.headline.title);
    println!("{}", recommendation.headline.subtitle);
    println!("{}", recommendation.headline.action);
    println!("Confidence Score: {}%", recommendation.confidence);

    println!();
    println!("Your Strengths");
    for strength in &recommendation.strengths {
        println!("  - {}", strength);
    }
    println!("Growth Opportunities");
    for area in &recommendation.growth_areas {
        println!("  - {}", area);
    }

    println!();
    println!("Recommended Learning Path");
    for (index, step) in recommendation.learning_path.iter().enumerate() {
        println!("  {}. {}: {}", index + 1, step.title, step.description);
        println!("     {}", step.resources.join(", "));
    }

    println!();
    println!("Career Paths");
    for career in ranked(results.career_paths.clone()) {
        println!("  {:>3}%  {}", career.percent, career.path.title);
        println!("        {}", career.path.description);
        println!("        {}", career.path.growth);
    }
}
