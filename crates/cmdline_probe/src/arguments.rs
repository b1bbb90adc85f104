use cmdline::{
    find_flag, find_parameter, reject_unrecognized, ArgError, MatchFn, Options, Parser,
};

use crate::{AddressError, Config, Kind, PortAddress};

#[derive(Debug, serde::Serialize)]
pub struct ProbeArguments {
    pub verbose: bool,
    pub ultra_verbose: bool,

    pub port_a: u16,
    pub port_b: u16,

    pub kind: Kind,
    /// In seconds.
    pub timeout: f64,

    pub run_names: Vec<String>,

    pub address_a: Option<PortAddress>,
    pub address_b: Option<PortAddress>,
    pub local_a: Option<PortAddress>,
    pub local_b: Option<PortAddress>,

    #[serde(skip)]
    host_a: String,
    #[serde(skip)]
    host_b: String,
    #[serde(skip)]
    local_host_a: String,
    #[serde(skip)]
    local_host_b: String,

    #[serde(skip)]
    errors: Vec<ArgError>,
}

impl ProbeArguments {
    pub const MAX_TIMEOUT: f64 = 60.0 * 60.0;

    pub fn new(config: &Config) -> Self {
        let endpoints = &config.endpoints;
        Self {
            verbose: false,
            ultra_verbose: false,
            port_a: endpoints.port_a,
            port_b: endpoints.port_b,
            kind: config.run.kind,
            timeout: config.run.timeout,
            run_names: vec![],
            address_a: None,
            address_b: None,
            local_a: None,
            local_b: None,
            host_a: endpoints.host_a.clone(),
            host_b: endpoints.host_b.clone(),
            local_host_a: endpoints.local_a.clone(),
            local_host_b: endpoints.local_b.clone(),
            errors: vec![],
        }
    }

    pub fn verbosity(&mut self, args: &mut Vec<String>) {
        while find_flag("-v", args) {
            self.verbose = true;
        }

        while find_flag("-V", args) {
            self.verbose = true;
            self.ultra_verbose = true;
        }
    }

    /// The log level `-v`/`-V` ask for, if either was given.
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        match (self.verbose, self.ultra_verbose) {
            (.., true) => Some(log::LevelFilter::Trace),
            (true, ..) => Some(log::LevelFilter::Debug),
            _ => None,
        }
    }

    /// Runs only the verbosity matcher over `args`, so the logger can be set
    /// up before the full parse.
    pub fn requested_log_level<I>(args: I) -> Option<log::LevelFilter>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut arguments = Self::new(&Config::default());
        Parser::from_args(args).parse_with(&mut arguments, &[Self::verbosity]);
        arguments.log_level()
    }

    pub fn hosts(&mut self, args: &mut Vec<String>) {
        while let Some(host) = find_parameter("-host", args) {
            self.host_a = host.clone();
            self.host_b = host;
        }

        while let Some(host) = find_parameter("-hostA", args) {
            self.host_a = host;
        }

        while let Some(host) = find_parameter("-hostB", args) {
            self.host_b = host;
        }
    }

    pub fn ports(&mut self, args: &mut Vec<String>) {
        fn parse(value: &str) -> Option<u16> {
            value.parse().ok().filter(|&port| port > 0)
        }

        const EXPECTED: &str = "not a valid port number";

        while let Some(value) = find_parameter("-port", args) {
            // B always sits right after A
            match parse(&value).and_then(|port| Some((port, port.checked_add(1)?))) {
                Some((a, b)) => {
                    self.port_a = a;
                    self.port_b = b;
                }
                None => self.invalid("-port", value, EXPECTED),
            }
        }

        while let Some(value) = find_parameter("-portA", args) {
            match parse(&value) {
                Some(port) => self.port_a = port,
                None => self.invalid("-portA", value, EXPECTED),
            }
        }

        while let Some(value) = find_parameter("-portB", args) {
            match parse(&value) {
                Some(port) => self.port_b = port,
                None => self.invalid("-portB", value, EXPECTED),
            }
        }
    }

    pub fn locals(&mut self, args: &mut Vec<String>) {
        while let Some(local) = find_parameter("-local", args) {
            self.local_host_a = local.clone();
            self.local_host_b = local;
        }

        while let Some(local) = find_parameter("-localA", args) {
            self.local_host_a = local;
        }

        while let Some(local) = find_parameter("-localB", args) {
            self.local_host_b = local;
        }
    }

    pub fn timeout(&mut self, args: &mut Vec<String>) {
        while let Some(value) = find_parameter("-timeout", args) {
            match value.parse::<f64>() {
                Ok(timeout) if (0.0..=Self::MAX_TIMEOUT).contains(&timeout) => {
                    self.timeout = timeout
                }
                _ => self.invalid(
                    "-timeout",
                    value,
                    "not a value in seconds, between 0 and 1 hour (inclusive)",
                ),
            }
        }
    }

    pub fn kind(&mut self, args: &mut Vec<String>) {
        while let Some(value) = find_parameter("-kind", args) {
            match Kind::from_name(&value) {
                Some(kind) => self.kind = kind,
                None => {
                    let expected = format!("not a valid kind ({})", Kind::NAMES);
                    self.invalid("-kind", value, expected)
                }
            }
        }
    }

    pub fn unrecognized(&mut self, args: &mut Vec<String>) {
        reject_unrecognized(&mut self.errors, args)
    }

    /// Takes the remainder as the run names and resolves the addresses.
    pub fn finish(&mut self, args: &mut Vec<String>) {
        self.run_names = args.clone();

        if let Err(err) = self.resolve_hosts() {
            self.errors.push(ArgError::custom(ResolveError::Host(err)));
        }

        if let Err(err) = self.resolve_locals() {
            self.errors.push(ArgError::custom(ResolveError::Local {
                a: self.local_host_a.clone(),
                b: self.local_host_b.clone(),
                err,
            }));
        }
    }

    /// Fills in A, then B, stopping at the first bad host. A stays resolved
    /// when only B is bad.
    fn resolve_hosts(&mut self) -> Result<(), AddressError> {
        fn resolve(host: &str, port: u16) -> Result<Option<PortAddress>, AddressError> {
            if host.trim().is_empty() || port == 0 {
                return Ok(None);
            }
            PortAddress::parse(host, port).map(Some)
        }

        self.address_a = resolve(&self.host_a, self.port_a)?;
        self.address_b = resolve(&self.host_b, self.port_b)?;
        Ok(())
    }

    fn resolve_locals(&mut self) -> Result<(), AddressError> {
        self.local_a = Some(PortAddress::parse(&self.local_host_a, 0)?);
        self.local_b = Some(PortAddress::parse(&self.local_host_b, 0)?);
        Ok(())
    }

    fn invalid(&mut self, flag: &str, value: String, expected: impl Into<String>) {
        log::debug!("rejected {} {}", flag, value);
        self.errors.push(ArgError::invalid_value(flag, value, expected))
    }
}

impl Options for ProbeArguments {
    const MATCHERS: &'static [MatchFn<Self>] = &[
        Self::verbosity,
        Self::hosts,
        Self::ports,
        Self::locals,
        Self::timeout,
        Self::kind,
        Self::unrecognized,
        // this has to be last
        Self::finish,
    ];

    fn errors(&self) -> &[ArgError] {
        &self.errors
    }

    fn help(&self) -> String {
        format!(
            "\
usage: probe [options] [run names...]

options:
  -v                 verbose output
  -V                 very verbose output, implies -v
  -host ADDR         host address of both endpoints
  -hostA ADDR        host address of endpoint A
  -hostB ADDR        host address of endpoint B
  -port PORT         port of endpoint A, endpoint B uses PORT + 1
  -portA PORT        port of endpoint A
  -portB PORT        port of endpoint B
  -local ADDR        local address of both endpoints
  -localA ADDR       local address of endpoint A
  -localB ADDR       local address of endpoint B
  -timeout SECONDS   between 0 and {max} (default: {timeout})
  -kind KIND         one of: {kinds}

defaults are read from '{path}' or ${var}",
            max = Self::MAX_TIMEOUT,
            timeout = self.timeout,
            kinds = Kind::NAMES,
            path = Config::DEFAULT_PATH,
            var = Config::PATH_VAR,
        )
    }
}

#[derive(Debug)]
enum ResolveError {
    Host(AddressError),
    Local {
        a: String,
        b: String,
        err: AddressError,
    },
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Host(err) => write!(f, "invalid host address: {}", err),
            Self::Local { a, b, err } => {
                write!(f, "invalid local address: '{}'/'{}' - {}", a, b, err)
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Host(err) | Self::Local { err, .. } => Some(err),
        }
    }
}
