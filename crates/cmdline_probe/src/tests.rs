use super::*;
use cmdline::Options as _;

use std::io::Write as _;

fn arguments() -> ProbeArguments {
    ProbeArguments::new(&Config::default())
}

fn strings(input: &[&str]) -> Vec<String> {
    input.iter().map(ToString::to_string).collect()
}

fn has_error(args: &ProbeArguments, needle: &str) -> bool {
    args.errors().iter().any(|err| err.to_string().contains(needle))
}

#[test]
fn finish_resolves_defaults() {
    let mut args = arguments();
    args.finish(&mut vec![]);

    assert!(args.errors().is_empty());

    let a = args.address_a.unwrap();
    assert_eq!(a.address.to_string(), "10.1.1.10");
    assert_eq!(a.port, 25000);

    let b = args.address_b.unwrap();
    assert_eq!(b.address.to_string(), "10.1.1.11");
    assert_eq!(b.port, 25001);

    assert_eq!(args.local_a.unwrap().to_string(), "127.0.0.1");
    assert_eq!(args.local_b.unwrap().to_string(), "127.0.0.1");
}

#[test]
fn finish_takes_remainder_as_run_names() {
    let mut args = arguments();
    let mut remainder = strings(&["foo", "bar"]);
    args.unrecognized(&mut remainder);
    args.finish(&mut remainder);

    assert!(args.errors().is_empty());
    assert_eq!(args.run_names, vec!["foo", "bar"]);
}

#[test]
fn host() {
    let mut args = arguments();
    let mut list = strings(&["-host", "10.11.1.2"]);
    args.hosts(&mut list);
    args.unrecognized(&mut list);
    args.finish(&mut list);

    assert!(list.is_empty());
    assert!(args.errors().is_empty());
    assert_eq!(args.address_a.unwrap().address.to_string(), "10.11.1.2");
    assert_eq!(args.address_b.unwrap().address.to_string(), "10.11.1.2");
}

#[test]
fn single_host() {
    let mut args = arguments();
    let mut list = strings(&["-hostB", "10.0.0.2", "-hostA", "10.0.0.1"]);
    args.hosts(&mut list);
    args.finish(&mut list);

    assert_eq!(args.address_a.unwrap().to_string(), "10.0.0.1:25000");
    assert_eq!(args.address_b.unwrap().to_string(), "10.0.0.2:25001");
}

#[test]
fn bad_host() {
    let mut args = arguments();
    let mut list = strings(&["-host", "X.Y.Z.2"]);
    args.hosts(&mut list);
    args.unrecognized(&mut list);
    args.finish(&mut list);

    assert!(list.is_empty());
    assert_eq!(args.errors().len(), 1);
    assert!(has_error(&args, "host address"));
    assert!(args.address_a.is_none());
}

#[test]
fn bad_host_b_keeps_a() {
    let mut args = arguments();
    let mut list = strings(&["-hostB", "X.Y.Z.2"]);
    args.hosts(&mut list);
    args.finish(&mut list);

    assert_eq!(args.errors().len(), 1);
    assert!(has_error(&args, "host address"));
    assert_eq!(args.address_a.unwrap().to_string(), "10.1.1.10:25000");
    assert!(args.address_b.is_none());
}

#[test]
fn bad_local() {
    let mut args = arguments();
    let mut list = strings(&["-localB", "nowhere"]);
    args.locals(&mut list);
    args.finish(&mut list);

    assert_eq!(args.errors().len(), 1);
    assert!(has_error(&args, "local address"));
    assert!(has_error(&args, "nowhere"));
}

#[test]
fn port() {
    let mut args = arguments();
    let mut list = strings(&["-port", "25"]);
    args.ports(&mut list);
    args.unrecognized(&mut list);
    args.finish(&mut list);

    assert!(list.is_empty());
    assert!(args.errors().is_empty());
    assert_eq!(args.port_a, 25);
    assert_eq!(args.port_b, 26);
}

#[test]
fn bad_ports() {
    for (flag, value) in &[
        ("-port", "99999"),
        ("-port", "0"),
        ("-port", "65535"),
        ("-portA", "-1"),
        ("-portB", "http"),
    ] {
        let mut args = arguments();
        let mut list = strings(&[*flag, *value]);
        args.ports(&mut list);
        args.unrecognized(&mut list);
        args.finish(&mut list);

        assert!(list.is_empty(), "{} {}", flag, value);
        assert_eq!(args.errors().len(), 1, "{} {}", flag, value);
        assert!(has_error(&args, flag));
        assert!(has_error(&args, value));

        // left alone
        assert_eq!(args.port_a, 25000);
        assert_eq!(args.port_b, 25001);
    }
}

#[test]
fn timeout() {
    let mut args = arguments();
    let mut list = strings(&["-timeout", "60"]);
    args.timeout(&mut list);
    args.unrecognized(&mut list);
    args.finish(&mut list);

    assert!(list.is_empty());
    assert!(args.errors().is_empty());
    assert!((args.timeout - 60.0).abs() < f64::EPSILON);
}

#[test]
fn bad_timeouts() {
    for value in &["A", "-0.1", "3600.5", "NaN"] {
        let mut args = arguments();
        let mut list = strings(&["-timeout", *value]);
        args.timeout(&mut list);
        args.unrecognized(&mut list);
        args.finish(&mut list);

        assert!(list.is_empty(), "{}", value);
        assert_eq!(args.errors().len(), 1, "{}", value);
        assert!(has_error(&args, "timeout"));
        assert!((args.timeout - 30.0).abs() < f64::EPSILON);
    }
}

#[test]
fn kind() {
    for (value, expected) in &[("One", Kind::One), ("two", Kind::Two), ("THREE", Kind::Three)] {
        let mut args = arguments();
        let mut list = strings(&["-kind", *value]);
        args.kind(&mut list);
        args.unrecognized(&mut list);
        args.finish(&mut list);

        assert!(list.is_empty());
        assert!(args.errors().is_empty());
        assert_eq!(args.kind, *expected);
    }
}

#[test]
fn bad_kind() {
    let mut args = arguments();
    let mut list = strings(&["-kind", "foo"]);
    args.kind(&mut list);
    args.unrecognized(&mut list);
    args.finish(&mut list);

    assert!(list.is_empty());
    assert_eq!(args.errors().len(), 1);
    assert!(has_error(&args, "kind"));
    assert_eq!(args.kind, Kind::One);
}

#[test]
fn verbosity() {
    let mut args = arguments();
    args.verbosity(&mut strings(&["-v"]));
    assert!(args.verbose);
    assert!(!args.ultra_verbose);

    let mut args = arguments();
    args.verbosity(&mut strings(&["-V"]));
    assert!(args.verbose);
    assert!(args.ultra_verbose);
}

#[test]
fn requested_log_level() {
    use log::LevelFilter;

    for (line, expected) in &[
        (&["prog"][..], None),
        (&["prog", "-v", "name"][..], Some(LevelFilter::Debug)),
        (&["prog", "-host", "10.0.0.1", "-V"][..], Some(LevelFilter::Trace)),
        (&["prog", "-V", "-v"][..], Some(LevelFilter::Trace)),
    ] {
        assert_eq!(
            ProbeArguments::requested_log_level(line.iter().copied()),
            *expected,
            "{:?}",
            line
        );
    }

    let mut args = arguments();
    args.parse_line("prog -v");
    assert_eq!(args.log_level(), Some(LevelFilter::Debug));
}

#[test]
fn log_filter_only_raises() {
    use log::LevelFilter;

    assert_eq!(log_filter(None, LevelFilter::Debug).as_deref(), Some("debug"));
    assert_eq!(log_filter(Some("info"), LevelFilter::Trace).as_deref(), Some("trace"));
    assert_eq!(log_filter(Some("shaken=info"), LevelFilter::Debug).as_deref(), Some("debug"));
    assert_eq!(log_filter(Some("trace"), LevelFilter::Debug), None);
    assert_eq!(log_filter(Some("DEBUG"), LevelFilter::Debug), None);
}

// the only test that installs the global logger
#[test]
fn verbose_enables_debug_logging() {
    std::env::remove_var("RUST_LOG");
    let level = ProbeArguments::requested_log_level(vec!["prog", "-v"]);
    init_logger(level).unwrap();

    assert!(log::log_enabled!(log::Level::Debug));
}

#[test]
fn parse_address() {
    let mut args = arguments();
    let parsed = args.parse_line("program -host 10.1.1.2 argName");

    assert_eq!(parsed.program_name.as_deref(), Some("program"));
    assert_eq!(parsed.remainder, vec!["argName"]);
    assert!(args.errors().is_empty());
    assert_eq!(args.address_a.unwrap().address.to_string(), "10.1.1.2");
    assert_eq!(args.address_b.unwrap().address.to_string(), "10.1.1.2");
}

#[test]
fn parse_all() {
    let mut args = arguments();
    let parsed =
        args.parse_line("program -host 11.1.1.2 -port 8080 -timeout 1.5 -kind Two testName");

    assert_eq!(parsed.remainder, vec!["testName"]);
    assert_eq!(args.run_names, vec!["testName"]);
    assert!(args.errors().is_empty());

    assert_eq!(args.address_a.unwrap().to_string(), "11.1.1.2:8080");
    assert_eq!(args.address_b.unwrap().to_string(), "11.1.1.2:8081");
    assert!((args.timeout - 1.5).abs() < f64::EPSILON);
    assert_eq!(args.kind, Kind::Two);
}

#[test]
fn parse_duplicates() {
    let mut args = arguments();
    let parsed = args.parse_line(
        "program -port 8080 -timeout 1.5 -kind two  -port 8081 -timeout 1.8 -kind three",
    );

    assert!(parsed.remainder.is_empty());
    assert!(args.errors().is_empty());
    assert_eq!(args.address_a.unwrap().port, 8081);
    assert_eq!(args.address_b.unwrap().port, 8082);
    assert!((args.timeout - 1.8).abs() < f64::EPSILON);
    assert_eq!(args.kind, Kind::Three);
}

#[test]
fn parse_keeps_going_after_errors() {
    let mut args = arguments();
    let parsed = args.parse_line("program stray -bogus -port 0 -kind two -timeout 5 name");

    assert_eq!(parsed.remainder, vec!["name"]);
    assert_eq!(args.errors().len(), 3);
    assert!(args.errors()[0].to_string().contains("-port"));
    assert!(args.errors()[1].to_string().contains("stray"));
    assert!(args.errors()[2].to_string().contains("-bogus"));

    assert_eq!(args.kind, Kind::Two);
    assert!((args.timeout - 5.0).abs() < f64::EPSILON);
}

#[test]
fn help_lists_flags() {
    let help = arguments().help();
    for flag in &["-host", "-portA", "-localB", "-timeout", "-kind"] {
        assert!(help.contains(flag), "{}", flag);
    }
}

#[test]
fn config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from_file(dir.path().join("probe.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_partial_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[endpoints]
host_a = "192.168.0.1"
port_b = 4000

[run]
kind = "three"
"#
    )
    .unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.endpoints.host_a, "192.168.0.1");
    assert_eq!(config.endpoints.host_b, "10.1.1.11");
    assert_eq!(config.endpoints.port_b, 4000);
    assert_eq!(config.run.kind, Kind::Three);

    let mut args = ProbeArguments::new(&config);
    args.parse_line("probe");
    assert!(args.errors().is_empty());
    assert_eq!(args.address_a.unwrap().to_string(), "192.168.0.1:25000");
    assert_eq!(args.address_b.unwrap().to_string(), "10.1.1.11:4000");
}

#[test]
fn config_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[endpoints]\nport_a = \"not a number\"").unwrap();
    assert!(Config::load_from_file(file.path()).is_err());
}
