use anyhow::Context;
use clap::Parser;
use quizterm::cli::Cli;
use quizterm::logging::init_tracing;
use quizterm::trivia::TriviaClient;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging).with_context(|| {
        format!(
            "failed to open log file '{}'",
            config.logging.file_path().display()
        )
    })?;
    tracing::info!(
        base_url = %config.api.base_url,
        amount = config.api.amount,
        category = config.api.category,
        insertion = ?config.quiz.insertion,
        "Starting quizterm"
    );

    let client = TriviaClient::new(&config.api).context("failed to create trivia client")?;
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;

    quizterm::ui::run(&config, client, runtime.handle())?;

    runtime.shutdown_background();
    Ok(())
}
