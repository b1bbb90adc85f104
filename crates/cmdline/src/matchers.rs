use crate::ArgError;

/// The character that marks a token as a flag.
pub const FLAG_PREFIX: char = '-';

pub fn is_flag(token: &str) -> bool {
    token.starts_with(FLAG_PREFIX)
}

/// Removes the first token equal to `flag`, returning whether there was one.
///
/// Only one occurrence is removed per call. Loop to drain repeats.
pub fn find_flag(flag: &str, args: &mut Vec<String>) -> bool {
    match args.iter().position(|arg| arg == flag) {
        Some(pos) => {
            args.remove(pos);
            true
        }
        None => false,
    }
}

/// Removes the first `flag` and the token right after it, returning that
/// token.
///
/// If `flag` is missing, or is the last token, nothing is removed. The value
/// may itself look like a flag (`-timeout -0.1`).
pub fn find_parameter(flag: &str, args: &mut Vec<String>) -> Option<String> {
    let pos = args.iter().position(|arg| arg == flag)?;
    if pos + 1 >= args.len() {
        return None;
    }
    args.drain(pos..pos + 2).nth(1)
}

/// Removes the first `flag` along with exactly `count` tokens following it,
/// returning those tokens in order.
///
/// This is all or nothing: if fewer than `count` tokens follow the flag, or
/// a flag shows up before `count` values were seen, `args` is left alone.
pub fn find_parameters(flag: &str, count: usize, args: &mut Vec<String>) -> Option<Vec<String>> {
    let pos = args.iter().position(|arg| arg == flag)?;

    let values = &args[pos + 1..];
    if values.len() < count || values[..count].iter().any(|arg| is_flag(arg)) {
        return None;
    }

    Some(args.drain(pos..=pos + count).skip(1).collect())
}

/// The catch-all, meant to run after every other matcher.
///
/// Options cannot follow positional arguments, so any flag still left over
/// is reported along with every token in front of it, and all of them are
/// removed. Tokens after the last leftover flag stay as positional
/// arguments. When no flag is left, nothing happens.
pub fn reject_unrecognized(errors: &mut Vec<ArgError>, args: &mut Vec<String>) {
    let pos = match args.iter().rposition(|arg| is_flag(arg)) {
        Some(pos) => pos,
        None => return,
    };

    for arg in args.drain(..=pos) {
        log::debug!("unrecognized argument: {}", arg);
        errors.push(ArgError::Unrecognized(arg));
    }
}
