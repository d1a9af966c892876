//! Template substitution for log messages.
//!
//! Templates mix literal text with two placeholder forms:
//!
//! - `{?}` anonymous slots, filled left to right by the next unconsumed
//!   argument;
//! - `{N}` positional slots, filled by the N-th argument of the original
//!   call regardless of how many anonymous slots already consumed it.
//!
//! Anonymous substitution runs first, positional substitution second, and
//! both index into the original argument list. Missing arguments and
//! out-of-range indices leave the placeholder verbatim; surplus arguments
//! are ignored.

use crate::convert::ToLogString;

const ANONYMOUS: &str = "{?}";

/// Renders `template` with the given type-erased arguments.
pub fn format_message(template: &str, args: &[&dyn ToLogString]) -> String {
    if args.is_empty() {
        return template.to_string();
    }
    let rendered: Vec<String> = args.iter().map(|arg| arg.to_log_string()).collect();
    substitute(template, &rendered)
}

fn substitute(template: &str, args: &[String]) -> String {
    let mut result = template.to_string();

    // Anonymous pass: consume arguments in call order until either the
    // placeholders or the arguments run out.
    let mut arg_index = 0;
    let mut pos = 0;
    while arg_index < args.len() {
        let Some(found) = result[pos..].find(ANONYMOUS) else {
            break;
        };
        let at = pos + found;
        result.replace_range(at..at + ANONYMOUS.len(), &args[arg_index]);
        // Skip past the inserted text so a substituted value containing
        // "{?}" is not consumed again.
        pos = at + args[arg_index].len();
        arg_index += 1;
    }

    // Positional pass: every {N} occurrence, scanning the whole string so
    // indices may also appear inside anonymously substituted text.
    for (index, arg) in args.iter().enumerate() {
        let placeholder = format!("{{{index}}}");
        let mut pos = 0;
        while let Some(found) = result[pos..].find(&placeholder) {
            let at = pos + found;
            result.replace_range(at..at + placeholder.len(), arg);
            pos = at + arg.len();
        }
    }

    result
}
