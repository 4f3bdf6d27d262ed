use crate::config::{Config, DEFAULT_ELLIPSIS};

/// Shorten `text` to at most `max_len` characters without splitting words.
///
/// Runs of whitespace collapse to a single space. A first word longer than
/// `max_len` is cut hard. When anything was dropped, `suffix` (default `…`)
/// is appended; it does not count toward `max_len`.
pub fn shorten_text(text: &str, max_len: usize, suffix: Option<&str>) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let Some(first) = words.first() else {
        return String::new();
    };

    let mut total = first.chars().count();
    let mut keep = 1;
    for word in &words[1..] {
        let len = word.chars().count();
        if total + 1 + len > max_len {
            break;
        }
        total += 1 + len;
        keep += 1;
    }

    let mut out = words[..keep].join(" ");
    let mut shortened = keep < words.len();
    if total > max_len {
        out = out.chars().take(max_len).collect();
        shortened = true;
    }
    if shortened {
        out.push_str(suffix.unwrap_or(DEFAULT_ELLIPSIS));
    }
    out
}

/// [`shorten_text`] with the configured ellipsis.
pub fn shorten_with(text: &str, max_len: usize, cfg: &Config) -> String {
    shorten_text(text, max_len, Some(&cfg.ellipsis))
}

/// Replace `{name}` placeholders with values from `args`.
///
/// Unknown placeholders are kept verbatim; `{{` and `}}` produce literal
/// braces.
pub fn substitute(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let body = &tail[1..];
        match body.find(['{', '}']) {
            Some(end) if body[end..].starts_with('}') => {
                let name = &body[..end];
                match args.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        tracing::debug!(name, "placeholder left unresolved");
                        out.push_str(&tail[..end + 2]);
                    }
                }
                rest = &body[end + 1..];
            }
            _ => {
                out.push('{');
                rest = body;
            }
        }
    }

    out.push_str(rest);
    out
}
