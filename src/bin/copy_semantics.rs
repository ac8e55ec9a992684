use clap::Parser;
use colored::Colorize;
use copy_semantics::{demo, CliArgs, ConsoleReporter, DeepCopier, DemoConfig};
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &DemoConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("copy_semantics={}", config.log_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.resolve()?;
    init_tracing(&config);
    tracing::debug!(?config, "resolved configuration");

    let copier = DeepCopier::new(config.codec);
    let mut reporter = ConsoleReporter::new(config.color, config.trace_addresses);
    demo::run(&copier, &mut reporter)?;
    Ok(())
}

fn main() {
    let args = CliArgs::parse();
    if let Err(err) = run(args) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
