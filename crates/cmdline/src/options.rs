use crate::{ArgError, MatchFn, Parser};

/// What is left after a results object has run its matchers.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Parsed {
    pub program_name: Option<String>,
    pub remainder: Vec<String>,
}

/// A results object that knows which matchers fill it in.
///
/// `MATCHERS` usually ends with a method that calls
/// [`reject_unrecognized`](crate::reject_unrecognized).
pub trait Options: Sized + 'static {
    const MATCHERS: &'static [MatchFn<Self>];

    fn errors(&self) -> &[ArgError];

    fn help(&self) -> String;

    fn parse_line(&mut self, line: &str) -> Parsed {
        self.run(&Parser::new(line))
    }

    fn parse_args<I>(&mut self, args: I) -> Parsed
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.run(&Parser::from_args(args))
    }

    /// Runs `MATCHERS` over the arguments of `parser`.
    fn run(&mut self, parser: &Parser) -> Parsed {
        let remainder = parser.parse_with(self, Self::MATCHERS);
        Parsed {
            program_name: parser.program_name().map(ToString::to_string),
            remainder,
        }
    }
}
