use crate::split_string;

/// Something that pulls the tokens it recognizes out of the remaining
/// arguments, leaving everything else where it was.
pub trait Matcher {
    fn apply(&mut self, args: &mut Vec<String>);
}

impl<F> Matcher for F
where
    F: FnMut(&mut Vec<String>),
{
    fn apply(&mut self, args: &mut Vec<String>) {
        (self)(args)
    }
}

/// A matcher written as a method on the results object it fills in.
pub type MatchFn<T> = fn(&mut T, &mut Vec<String>);

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Parser {
    program_name: Option<String>,
    args: Vec<String>,
}

impl Parser {
    pub fn new(line: &str) -> Self {
        Self::from_args(split_string(line))
    }

    /// Builds a parser from an already split argument list, such as
    /// `std::env::args()`. The first element is the program name.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut iter = args.into_iter().map(Into::into);
        let program_name = iter.next();
        let args: Vec<String> = iter.collect();
        log::trace!("program: {:?}, {} argument(s)", program_name, args.len());
        Self { program_name, args }
    }

    pub fn program_name(&self) -> Option<&str> {
        self.program_name.as_deref()
    }

    /// Everything after the program name, before any matching.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Runs each matcher once, in order, over a single shared remainder and
    /// returns whatever none of them consumed.
    pub fn parse(&self, matchers: &mut [&mut dyn Matcher]) -> Vec<String> {
        log::trace!("running {} matcher(s)", matchers.len());

        let mut remainder = self.args.clone();
        for matcher in matchers.iter_mut() {
            matcher.apply(&mut remainder);
        }
        remainder
    }

    /// Like [`Parser::parse`] but each matcher also gets `state`.
    pub fn parse_with<T>(&self, state: &mut T, matchers: &[MatchFn<T>]) -> Vec<String> {
        log::trace!("running {} matcher(s)", matchers.len());

        let mut remainder = self.args.clone();
        for matcher in matchers {
            matcher(state, &mut remainder);
        }
        remainder
    }
}
