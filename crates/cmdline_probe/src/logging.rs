use log::LevelFilter;

/// The terminal logger filters on `RUST_LOG`, so a requested level has to go
/// through there rather than `log::set_max_level`.
pub fn init_logger(requested: Option<LevelFilter>) -> anyhow::Result<()> {
    let current = std::env::var("RUST_LOG").ok();
    if let Some(filter) = requested.and_then(|level| log_filter(current.as_deref(), level)) {
        std::env::set_var("RUST_LOG", filter);
    }

    alto_logger::init_alt_term_logger()?;
    Ok(())
}

/// The `RUST_LOG` value that lets `requested` through, or `None` if `current`
/// already does. A filter that isn't a plain level gets replaced.
pub fn log_filter(current: Option<&str>, requested: LevelFilter) -> Option<String> {
    let current = current
        .and_then(|filter| filter.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Off);

    if current >= requested {
        return None;
    }
    Some(requested.to_string().to_ascii_lowercase())
}
