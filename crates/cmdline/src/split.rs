use std::borrow::Cow;

#[derive(Copy, Clone, Debug)]
enum Mode {
    Unquoted,
    Quoted,
}

/// Splits a command line into tokens.
///
/// Whitespace separates tokens outside of double quotes. Inside quotes
/// everything is literal except `\"` and `\\`. Outside of quotes a backslash
/// only escapes `"`, `\` and whitespace; before anything else it is kept.
///
/// Opening a quote always starts a new token, closing one does not, so
/// `foo" bar"moo` is `["foo", " barmoo"]`. An unterminated quote is closed
/// at the end of the input.
pub fn split_string(input: &str) -> Vec<String> {
    let mut out = vec![];
    let mut mode = Mode::Unquoted;
    // `None` until something has been seen for the current token
    let mut current: Option<String> = None;

    let mut iter = input.chars().peekable();
    while let Some(ch) = iter.next() {
        match (mode, ch, iter.peek().copied()) {
            (Mode::Unquoted, '\\', Some(next))
                if next == '"' || next == '\\' || next.is_whitespace() =>
            {
                current.get_or_insert_with(String::new).push(next);
                iter.next();
            }

            (Mode::Unquoted, '"', ..) => {
                out.extend(current.take());
                current.replace(String::new());
                mode = Mode::Quoted;
            }

            (Mode::Unquoted, ch, ..) if ch.is_whitespace() => out.extend(current.take()),

            (Mode::Quoted, '\\', Some(next)) if next == '"' || next == '\\' => {
                current.get_or_insert_with(String::new).push(next);
                iter.next();
            }

            (Mode::Quoted, '"', ..) => mode = Mode::Unquoted,

            (.., ch, _) => current.get_or_insert_with(String::new).push(ch),
        }
    }

    out.extend(current);
    out
}

/// Renders a token so that [`split_string`] reads it back unchanged.
pub fn quote(token: &str) -> Cow<'_, str> {
    fn needs_quotes(ch: char) -> bool {
        ch == '"' || ch == '\\' || ch.is_whitespace()
    }

    if !token.is_empty() && !token.contains(needs_quotes) {
        return Cow::Borrowed(token);
    }

    let mut out = String::with_capacity(token.len() + 2);
    out.push('"');
    for ch in token.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    Cow::Owned(out)
}

/// Quotes each token and joins them with a single space.
pub fn join<I>(tokens: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tokens.into_iter().fold(String::new(), |mut out, token| {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&quote(token.as_ref()));
        out
    })
}
