//! Positional template rendering
//!
//! Templates use `%s` markers, each consuming the next argument in order.
//! `%%` is a literal percent sign. Any other `%` is copied through as text.
//! Output is never escaped: templates may carry markup on purpose and the
//! consuming surface owns sanitization.

use crate::error::{I18nError, I18nResult};

/// Render `template`, substituting `args` into `%s` markers left to right.
///
/// Surplus arguments are ignored. Running out of arguments fails with
/// [`I18nError::MissingArgument`] naming the 1-based placeholder position;
/// no partially rendered text is ever returned.
pub fn render<S: AsRef<str>>(template: &str, args: &[S]) -> I18nResult<String> {
    let extra: usize = args.iter().map(|a| a.as_ref().len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut remaining = args.iter();
    let mut position = 0;
    let mut rest = template;

    while let Some(idx) = rest.find('%') {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx + 1..];
        match tail.as_bytes().first() {
            Some(b's') => {
                position += 1;
                let arg = remaining.next().ok_or(I18nError::MissingArgument {
                    position,
                    supplied: args.len(),
                })?;
                out.push_str(arg.as_ref());
                rest = &tail[1..];
            }
            Some(b'%') => {
                out.push('%');
                rest = &tail[1..];
            }
            _ => {
                out.push('%');
                rest = tail;
            }
        }
    }
    out.push_str(rest);

    Ok(out)
}

/// Number of `%s` markers in `template`.
pub fn placeholder_count(template: &str) -> usize {
    let mut count = 0;
    let mut rest = template;

    while let Some(idx) = rest.find('%') {
        let tail = &rest[idx + 1..];
        match tail.as_bytes().first() {
            Some(b's') => {
                count += 1;
                rest = &tail[1..];
            }
            Some(b'%') => rest = &tail[1..],
            _ => rest = tail,
        }
    }

    count
}
