use clap::Parser;
use emoji_kitchen::cli::{render, Args, Query};
use emoji_kitchen::EmojiKitchen;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    // clap already enforces 1..=2 positional tokens
    let Some(query) = Query::from_args(&args.emoji) else {
        return Ok(());
    };

    let kitchen = EmojiKitchen::from_path(&args.data)?;
    let results = query.run(&kitchen);
    print!("{}", render(&query, &results, args.format)?);

    Ok(())
}
