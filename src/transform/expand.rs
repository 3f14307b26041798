use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::transform::params::{parse_parameter, Parameter};
use crate::transform::split::split_top_level_nonempty;

/// Definition-line shape: `<indent>def <name>(<params>) -> <rettype>: ...`.
static DEF_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*def\s+\w+\s*\()(.*)(\)\s*->\s*.*?:\s*\.\.\.)$").unwrap());

/// Parameter list of a rendered signature, for the complexity sort.
static PARAM_LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)").unwrap());

/// Expand a definition line into every call-shape a caller could legally
/// use: each union arm standalone, defaulted parameters present or omitted.
///
/// Lines that are not definitions, have nothing to expand, or fail the
/// definition pattern come back unchanged as a single-element list. Results
/// are deduplicated and sorted fewest-arguments first, matching the
/// simplest-to-most-complex overload-listing convention.
pub fn expand_signature(line: &str) -> Vec<String> {
    if !line.trim_start().starts_with("def ") {
        return vec![line.to_string()];
    }
    let Some(caps) = DEF_LINE.captures(line) else {
        return vec![line.to_string()];
    };
    let prefix = &caps[1];
    let params_str = &caps[2];
    let suffix = &caps[3];

    let trimmed = params_str.trim();
    if trimmed.is_empty() || trimmed == "self" {
        return vec![line.to_string()];
    }

    let params: Vec<Parameter> = split_top_level_nonempty(params_str, ',')
        .iter()
        .map(|fragment| parse_parameter(fragment))
        .collect();

    if !needs_expansion(&params) {
        return vec![line.to_string()];
    }

    let choices: Vec<Vec<Option<String>>> = params.iter().map(parameter_choices).collect();

    let mut seen = HashSet::new();
    let mut results = Vec::new();
    for combination in cartesian_product(&choices) {
        let rendered: Vec<&str> = combination
            .iter()
            .filter_map(|choice| choice.as_deref())
            .collect();
        let candidate = format!("{prefix}{}{suffix}", rendered.join(", "));
        if seen.insert(candidate.clone()) {
            results.push(candidate);
        }
    }

    // Stable sort keeps the arm order from the cross product as tie-break.
    results.sort_by_key(|rendered| parameter_count(rendered));
    results
}

/// Expansion is needed iff some non-receiver, non-variadic parameter has a
/// union type or a default value.
fn needs_expansion(params: &[Parameter]) -> bool {
    params
        .iter()
        .any(|p| !p.is_receiver() && !p.is_variadic && (p.ty.contains('|') || p.has_default))
}

/// The ordered rendering choices for one parameter; `None` is the omission
/// sentinel. Union arms keep their source order, and when a parameter has
/// both a union and a default the omission choice comes after all arms.
fn parameter_choices(param: &Parameter) -> Vec<Option<String>> {
    if param.is_receiver() || param.is_variadic {
        return vec![Some(param.render())];
    }

    if param.ty.contains('|') {
        let mut choices: Vec<Option<String>> = split_top_level_nonempty(&param.ty, '|')
            .into_iter()
            .map(|arm| Some(format!("{}: {arm}", param.name)))
            .collect();
        if param.has_default {
            choices.push(None);
        }
        return choices;
    }

    if param.has_default {
        return vec![Some(param.render()), None];
    }

    vec![Some(param.render())]
}

/// Cross product of the per-parameter choice lists, rightmost list varying
/// fastest, so per-parameter choice order is preserved front to back.
fn cartesian_product<'a, T>(lists: &'a [Vec<T>]) -> impl Iterator<Item = Vec<&'a T>> + 'a {
    let total: usize = lists.iter().map(Vec::len).product();
    let mut index = 0;
    std::iter::from_fn(move || {
        if index >= total {
            return None;
        }
        let mut combination = Vec::with_capacity(lists.len());
        let mut remainder = index;
        for list in lists.iter().rev() {
            combination.push(&list[remainder % list.len()]);
            remainder /= list.len();
        }
        combination.reverse();
        index += 1;
        Some(combination)
    })
}

/// Sort key for rendered signatures: top-level parameter count with the
/// receiver excluded. Commas inside generic brackets do not count. Lines
/// whose parameter list cannot be located sort last.
fn parameter_count(line: &str) -> usize {
    let Some(caps) = PARAM_LIST.captures(line) else {
        return usize::MAX;
    };
    let params = caps[1].trim();
    if params.is_empty() || params == "self" {
        return 0;
    }

    let pieces = split_top_level_nonempty(params, ',');
    let count = pieces.len();
    if pieces.first().is_some_and(|piece| piece == "self") {
        count - 1
    } else {
        count
    }
}
