use std::env;
use std::fs;
use std::io::{self, BufRead, Read, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use notequiz::config::Config;
use notequiz::errors::AppResult;
use notequiz::models::question::{Question, QuizSet};
use notequiz::services::{concepts, segmenter, QuizAttemptService, QuizService};

fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let json_output = args.iter().any(|a| a == "--json");
    let path = args.iter().find(|a| !a.starts_with("--"));

    let text = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let quiz = QuizService::generate_with_rng(&text, &mut rng);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&quiz).expect("quiz set serializes"));
        return Ok(());
    }

    if quiz.is_empty() {
        println!("No quiz available: the summary does not contain enough quizzable sentences.");
        return Ok(());
    }

    print_concepts(&text);
    run_session(&text, quiz, &mut rng)
}

fn print_concepts(text: &str) {
    let sentences = segmenter::segment(text);
    let concepts = concepts::all_concepts(&sentences);
    if !concepts.is_empty() {
        println!("Key concepts: {}", concepts.join(", "));
    }
}

fn run_session(text: &str, mut quiz: QuizSet, rng: &mut StdRng) -> AppResult<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let mut attempt = QuizAttemptService::start(quiz)?;

        while let Some(question) = QuizAttemptService::current_question(&attempt).cloned() {
            print_question(&question);
            let Some(choice) = read_choice(&mut lines, question.options.len())? else {
                return Ok(()); // input closed mid-quiz
            };
            let selected = question.options[choice - 1].clone();
            let correct = QuizAttemptService::submit_answer(&mut attempt, &selected)?;
            if correct {
                println!("Correct!");
            } else {
                println!("Not quite. The correct answer was: {}", question.correct_answer);
            }
        }

        println!(
            "\nFinal score: {}/{}",
            attempt.score,
            QuizAttemptService::total(&attempt)
        );

        print!("Retake with a fresh quiz? [r/N] ");
        io::stdout().flush()?;
        match lines.next().transpose()? {
            Some(line) if line.trim().eq_ignore_ascii_case("r") => {
                quiz = QuizService::generate_with_rng(text, rng);
                if quiz.is_empty() {
                    println!("No quiz available on regeneration.");
                    return Ok(());
                }
            }
            _ => return Ok(()),
        }
    }
}

fn print_question(question: &Question) {
    println!("\nQ{}. {}", question.id + 1, question.text);
    for (index, option) in question.options.iter().enumerate() {
        println!("  {}) {}", index + 1, option);
    }
}

/// Read a 1-based option number from stdin, re-prompting on anything else.
/// Returns None when input is exhausted.
fn read_choice(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    option_count: usize,
) -> AppResult<Option<usize>> {
    loop {
        print!("Your answer [1-{}]: ", option_count);
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(None);
        };
        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=option_count).contains(&choice) => return Ok(Some(choice)),
            _ => println!("Please enter a number between 1 and {}.", option_count),
        }
    }
}
