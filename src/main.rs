use clap::{CommandFactory, Parser};
use colored::Colorize;
use git_dolly::areas::dolly::Dolly;
use git_dolly::areas::settings::Settings;
use git_dolly::commands::clone::{FAILURE_EXIT_CODE, effective_args};
use is_terminal::IsTerminal;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "git-dolly",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Clone a repository into a directory tree mirroring its host and path",
    long_about = "Clones a git repository under $GIT_DOLLY_PATH (default: ~/src), \
    at <host>/<path> derived from the repository reference. \
    All arguments are passed to `git clone`; the last one is the repository.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        index = 1,
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Options for `git clone`, followed by the repository reference"
    )]
    args: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    colored::control::set_override(std::io::stderr().is_terminal());

    let cli = Cli::parse();
    let args = effective_args(cli.args);

    if args.is_empty() {
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::from(FAILURE_EXIT_CODE);
    }

    match run(&args).await {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{} {:#}", "fatal:".red().bold(), err);
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

async fn run(args: &[String]) -> anyhow::Result<u8> {
    let settings = Settings::from_env()?;
    let mut dolly = Dolly::new(&settings, Box::new(std::io::stdout()));

    dolly.clone_repository(args).await
}
