mod cli;

use crate::cli::Args;

fn main() {
    let tokens: Vec<_> = std::env::args_os().skip(1).collect();
    let Some(args) = Args::from_tokens(&tokens) else {
        eprintln!("{}", cli::USAGE);
        std::process::exit(-1);
    };

    // stdout only carries the result, logs go to stderr
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    )
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = cli::run(args.size) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
