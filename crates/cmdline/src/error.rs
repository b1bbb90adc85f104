/// A problem found with the command line while matching it.
#[derive(Debug)]
#[non_exhaustive]
pub enum ArgError {
    /// A leftover flag, or a token stranded in front of one.
    Unrecognized(String),
    /// A recognized flag whose value was rejected.
    InvalidValue {
        flag: String,
        value: String,
        expected: String,
    },
    Custom(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl ArgError {
    pub fn invalid_value(
        flag: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            flag: flag.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    pub fn custom(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Custom(Box::new(err))
    }
}

impl std::fmt::Display for ArgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrecognized(arg) => write!(f, "unrecognized argument: '{}'", arg),
            Self::InvalidValue {
                flag,
                value,
                expected,
            } => write!(f, "could not parse '{} {}' - {}", flag, value, expected),
            Self::Custom(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ArgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Custom(err) => Some(&**err),
            _ => None,
        }
    }
}
