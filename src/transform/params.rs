/// One parameter fragment of a stub signature, decomposed.
///
/// The default value text is not kept; only its presence matters for
/// expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
    pub has_default: bool,
    pub is_variadic: bool,
}

impl Parameter {
    /// Bare receiver (`self` with no annotation). Never expanded.
    pub fn is_receiver(&self) -> bool {
        self.name == "self" && self.ty.is_empty()
    }

    /// Render the fragment the way it appears in a signature.
    pub fn render(&self) -> String {
        if self.is_variadic {
            format!("*{}: {}", self.name, self.ty)
        } else if self.ty.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.ty)
        }
    }
}

/// Decompose one trimmed parameter fragment into name, type, default
/// presence, and variadic marker.
///
/// Best effort with no failure path: any string yields a decomposition. A
/// single `*` prefix marks a rest parameter; `**` fragments are not treated
/// as variadic and keep their prefix in the name, so rendering reproduces
/// them verbatim.
pub fn parse_parameter(fragment: &str) -> Parameter {
    let mut rest = fragment.trim();

    let is_variadic = rest.starts_with('*') && !rest.starts_with("**");
    if is_variadic {
        rest = &rest[1..];
    }

    let has_default = rest.contains('=');
    if let Some((before_default, _)) = rest.split_once('=') {
        rest = before_default.trim();
    }

    match rest.split_once(':') {
        Some((name, ty)) => Parameter {
            name: name.trim().to_string(),
            ty: ty.trim().to_string(),
            has_default,
            is_variadic,
        },
        None => Parameter {
            name: rest.trim().to_string(),
            ty: String::new(),
            has_default,
            is_variadic,
        },
    }
}
