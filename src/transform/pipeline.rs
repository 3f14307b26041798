use std::collections::HashSet;

use crate::transform::expand::expand_signature;
use crate::transform::nullable::normalize_nullable;
use crate::transform::rewrite::{strip_marker_bases, AbstractRewriter};

/// Run the fixed rewrite pipeline over the text of one stub file.
///
/// Per line, in order: nullable normalization, marker-base stripping,
/// abstract-decorator folding, signature expansion. The collected output is
/// then deduplicated globally, first occurrence wins, which collapses
/// overload sets from different input lines that render identically. Every
/// output line is newline-terminated; empty input stays empty.
pub fn rewrite_stub_text(content: &str) -> String {
    let mut rewriter = AbstractRewriter::new();
    let mut output = Vec::new();

    for line in content.lines() {
        let normalized = normalize_nullable(line);
        let stripped = strip_marker_bases(&normalized);
        let Some(kept) = rewriter.apply(&stripped) else {
            continue;
        };
        output.extend(expand_signature(&kept));
    }

    let mut seen = HashSet::new();
    output
        .into_iter()
        .filter(|line| seen.insert(line.clone()))
        .map(|line| line + "\n")
        .collect()
}
