use clap::Parser;
use letters_in_squares::cli::{self, Args, Command};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), String> {
    let config_path = args.config.as_deref();

    match args.command {
        Command::Wordle(wordle) => {
            let cfg = cli::load_config(config_path)?;
            cli::run_wordle(wordle, &cfg).await
        }
        Command::Grid(grid) => {
            let cfg = cli::load_config(config_path)?;
            cli::run_grid(grid, &cfg).await
        }
        Command::Score(score) => cli::run_score(&score),
        Command::Config { action } => cli::handle_config_action(action, config_path),
    }
}
