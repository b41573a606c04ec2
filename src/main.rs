use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pdf_quiz::{logger, Quiz};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// PDF, text or JSON file to load the questions from
    path: PathBuf,

    /// Write the parsed questions to this JSON file instead of starting the quiz
    #[arg(short, long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Print the parsed questions and exit
    #[arg(short, long, conflicts_with = "export")]
    list: bool,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.log_file.as_deref()).context("Failed to open log file")?;

    let quiz = Quiz::from_path(&args.path)
        .with_context(|| format!("Failed to load questions from {}", args.path.display()))?;

    if let Some(export) = &args.export {
        quiz.export_json(export)?;
        println!(
            "Exported {} questions to {}",
            quiz.questions().len(),
            export.display()
        );
        return Ok(());
    }

    if args.list {
        for question in quiz.questions() {
            println!("{}", question.prompt);
            for option in &question.options {
                println!("    {}", option);
            }
            if let Some(answer) = &question.answer {
                println!("    Answer: {}", answer);
            }
            if let Some(explanation) = &question.explanation {
                println!("    Explanation: {}", explanation);
            }
        }
        return Ok(());
    }

    if quiz.is_empty() {
        println!(
            "No multiple-choice questions found in {}",
            args.path.display()
        );
        return Ok(());
    }

    quiz.run()?;
    Ok(())
}
