//! Shell-like command line splitting and a matcher pipeline for pulling
//! flags and parameters out of the resulting tokens.
//!
//! ```
//! use cmdline::{find_flag, find_parameter, Parser};
//!
//! let parser = Parser::new(r#"prog -v -name "some thing" rest"#);
//!
//! let mut verbose = false;
//! let mut name = None;
//!
//! let rest = parser.parse(&mut [
//!     &mut |args: &mut Vec<String>| verbose = find_flag("-v", args),
//!     &mut |args: &mut Vec<String>| name = find_parameter("-name", args),
//! ]);
//!
//! assert_eq!(parser.program_name(), Some("prog"));
//! assert!(verbose);
//! assert_eq!(name.as_deref(), Some("some thing"));
//! assert_eq!(rest, vec!["rest"]);
//! ```

mod split;
pub use split::{join, quote, split_string};

mod parser;
pub use parser::{MatchFn, Matcher, Parser};

mod matchers;
pub use matchers::{
    find_flag, find_parameter, find_parameters, is_flag, reject_unrecognized, FLAG_PREFIX,
};

mod options;
pub use options::{Options, Parsed};

mod error;
pub use error::ArgError;
