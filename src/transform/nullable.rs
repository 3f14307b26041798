use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::transform::split::split_top_level_nonempty;

/// Return-type annotation: the text between `->` and the `:` that ends the
/// signature.
static RETURN_ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"-> ([^:]+):").unwrap());

/// Parameter annotation: the text after a `name: ` marker up to the next
/// comma, closing paren, or default separator, with at most one bracketed
/// generic suffix.
static PARAM_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+): ([^:,)=\[]+(?:\[[^\]]*\])?[^:,)=]*)").unwrap());

static NULLABLE_BEFORE_DEFAULT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\?=").unwrap());

/// Rewrite `T | None` unions into `?`-suffixed nullable arms.
///
/// `foo: str | Path | None` becomes `foo: str? | Path?` and
/// `-> BuilderFactory | None:` becomes `-> BuilderFactory?:`. Annotations
/// without a `None` arm are left untouched byte-for-byte. Must run before
/// signature expansion, which consumes the union syntax this produces.
pub fn normalize_nullable(line: &str) -> String {
    let result = RETURN_ANNOTATION.replace_all(line, |caps: &Captures| {
        match nullable_form(&caps[1]) {
            Some(arms) => format!("-> {arms}:"),
            None => caps[0].to_string(),
        }
    });

    let result = PARAM_ANNOTATION.replace_all(&result, |caps: &Captures| {
        match nullable_form(&caps[2]) {
            Some(arms) => format!("{}: {arms}", &caps[1]),
            None => caps[0].to_string(),
        }
    });

    // The rewrite can leave `T?=` where `T | None = ...` used to be.
    NULLABLE_BEFORE_DEFAULT.replace_all(&result, "? =").into_owned()
}

/// The rewritten union when the annotation carries a `None` arm, `None`
/// when the annotation is to stay untouched.
fn nullable_form(annotation: &str) -> Option<String> {
    let arms = split_top_level_nonempty(annotation, '|');
    if !arms.iter().any(|arm| arm == "None") {
        return None;
    }

    let rewritten: Vec<String> = arms
        .iter()
        .filter(|arm| *arm != "None")
        .map(|arm| format!("{arm}?"))
        .collect();
    // A bare `None` annotation is not a union; leave it alone.
    if rewritten.is_empty() {
        return None;
    }
    Some(rewritten.join(" | "))
}
