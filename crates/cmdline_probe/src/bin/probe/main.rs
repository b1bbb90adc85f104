use cmdline::Options as _;
use cmdline_probe::{init_logger, Config, ProbeArguments};

fn main() -> anyhow::Result<()> {
    simple_env_load::load_env_from(&[".env", ".env.dev"]);
    init_logger(ProbeArguments::requested_log_level(std::env::args()))?;

    let config = Config::load()?;
    let mut arguments = ProbeArguments::new(&config);

    log::debug!("command line: {}", cmdline::join(std::env::args()));
    let parsed = arguments.parse_args(std::env::args());

    if !arguments.errors().is_empty() {
        for err in arguments.errors() {
            eprintln!("error: {}", err);
        }
        eprintln!();
        eprintln!("{}", arguments.help());
        std::process::exit(1);
    }

    log::info!(
        "{} resolved {} run(s)",
        parsed.program_name.as_deref().unwrap_or("probe"),
        arguments.run_names.len()
    );

    println!("{}", serde_json::to_string_pretty(&arguments)?);
    Ok(())
}
