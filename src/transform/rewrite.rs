use once_cell::sync::Lazy;
use regex::Regex;

use crate::transform::split::split_top_level_nonempty;

/// Decorator line that marks the following definition as abstract.
const ABSTRACT_MARKER: &str = "@abstractmethod";

/// Marker base class stripped from class declarations.
const MARKER_BASE: &str = "ABC";

/// Metaclass keyword argument stripped from class declarations.
const METACLASS_PREFIX: &str = "metaclass=";

static DEF_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s*)def\s+").unwrap());

static CLASS_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*class\s+\w+)\(([^)]+)\)(\s*:.*)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DecoratorState {
    #[default]
    Idle,
    PendingAbstract,
}

/// Folds the `@abstractmethod` decorator convention into an inline
/// `abstract` keyword on the following definition line.
///
/// The marker line itself is consumed. The pending state carries across
/// exactly one line: if the next line is not a definition it is emitted
/// unmodified and the state is cleared anyway.
#[derive(Debug, Default)]
pub struct AbstractRewriter {
    state: DecoratorState,
}

impl AbstractRewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line through the state machine. Returns `None` when the
    /// line was the decorator marker and is consumed from the output.
    pub fn apply(&mut self, line: &str) -> Option<String> {
        if line.trim() == ABSTRACT_MARKER {
            self.state = DecoratorState::PendingAbstract;
            return None;
        }

        let output = match self.state {
            DecoratorState::PendingAbstract if line.trim_start().starts_with("def ") => {
                add_abstract_keyword(line)
            }
            _ => line.to_string(),
        };
        self.state = DecoratorState::Idle;
        Some(output)
    }
}

/// Insert `abstract` before the `def` keyword, preserving indentation.
fn add_abstract_keyword(line: &str) -> String {
    match DEF_KEYWORD.captures(line) {
        Some(caps) => {
            let indent = &caps[1];
            format!("{indent}abstract {}", &line[indent.len()..])
        }
        None => line.to_string(),
    }
}

/// Strip the marker base class and `metaclass=` arguments from a class
/// declaration, dropping the parenthesized base list entirely when nothing
/// remains. Lines without a base list, or whose base list does not parse,
/// pass through unchanged.
pub fn strip_marker_bases(line: &str) -> String {
    let Some(caps) = CLASS_DECLARATION.captures(line) else {
        return line.to_string();
    };
    let head = &caps[1];
    let bases_str = &caps[2];
    let tail = &caps[3];

    let bases: Vec<String> = split_top_level_nonempty(bases_str, ',')
        .into_iter()
        .filter(|base| base != MARKER_BASE && !base.starts_with(METACLASS_PREFIX))
        .collect();

    if bases.is_empty() {
        format!("{head}{tail}")
    } else {
        format!("{head}({}){tail}", bases.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_marker_line_is_consumed_and_next_def_rewritten() {
        let mut rewriter = AbstractRewriter::new();
        assert_eq!(rewriter.apply("    @abstractmethod"), None);
        assert_eq!(
            rewriter.apply("    def build(self) -> Environment: ...").as_deref(),
            Some("    abstract def build(self) -> Environment: ...")
        );
    }

    #[test]
    fn test_pending_state_clears_after_one_line() {
        let mut rewriter = AbstractRewriter::new();
        assert_eq!(rewriter.apply("@abstractmethod"), None);
        // A non-definition line clears the state without being modified.
        assert_eq!(rewriter.apply("class Builder:").as_deref(), Some("class Builder:"));
        assert_eq!(
            rewriter.apply("def build(self) -> Environment: ...").as_deref(),
            Some("def build(self) -> Environment: ...")
        );
    }

    #[test]
    fn test_definition_without_marker_is_unchanged() {
        let mut rewriter = AbstractRewriter::new();
        assert_eq!(
            rewriter.apply("def build(self) -> Environment: ...").as_deref(),
            Some("def build(self) -> Environment: ...")
        );
    }

    #[test]
    fn test_marker_must_match_exactly_when_trimmed() {
        let mut rewriter = AbstractRewriter::new();
        let line = "    @abstractmethod()";
        assert_eq!(rewriter.apply(line).as_deref(), Some(line));
    }

    #[test]
    fn test_strip_all_marker_bases() {
        assert_eq!(
            strip_marker_bases("class Builder(ABC, metaclass=abc.ABCMeta):"),
            "class Builder:"
        );
    }

    #[test]
    fn test_strip_keeps_real_bases() {
        assert_eq!(
            strip_marker_bases("class BaseBuilder(Builder, ABC):"),
            "class BaseBuilder(Builder):"
        );
    }

    #[test]
    fn test_plain_inheritance_is_unchanged() {
        assert_eq!(
            strip_marker_bases("class SimpleBuilder(BaseBuilder):"),
            "class SimpleBuilder(BaseBuilder):"
        );
    }

    #[test]
    fn test_class_without_bases_is_unchanged() {
        assert_eq!(strip_marker_bases("class Builder:"), "class Builder:");
    }

    #[test]
    fn test_generic_base_with_comma_is_kept_whole() {
        assert_eq!(
            strip_marker_bases("class Registry(Mapping[str, int], ABC):"),
            "class Registry(Mapping[str, int]):"
        );
    }

    #[test]
    fn test_trailing_content_after_colon_is_preserved() {
        assert_eq!(
            strip_marker_bases("    class Builder(ABC): ..."),
            "    class Builder: ..."
        );
    }
}
