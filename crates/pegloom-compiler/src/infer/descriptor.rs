//! Type descriptors: the structural summary of what a rule produces.

use std::fmt;

use pegloom_core::utils::quote;

/// Structural category of a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseType {
    String,
    Tuple,
    Union,
    Unknown,
}

impl BaseType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Tuple => "tuple",
            Self::Union => "union",
            Self::Unknown => "unknown",
        }
    }

    /// Tuples and unions need parentheses when embedded in a larger type.
    pub fn is_composite(self) -> bool {
        matches!(self, Self::Tuple | Self::Union)
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable description of a value's shape.
///
/// Descriptors are shared through `Rc` and never modified after creation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    /// Rendered type, e.g. `["a", string[]]`.
    pub type_string: String,
    pub base_type: BaseType,
    /// Whether the absent marker is a possible value.
    pub nullable: bool,
    pub is_array: bool,
    pub documentation: Option<String>,
}

impl TypeDescriptor {
    fn new(type_string: impl Into<String>, base_type: BaseType) -> Self {
        Self {
            type_string: type_string.into(),
            base_type,
            nullable: false,
            is_array: false,
            documentation: None,
        }
    }

    /// Generic `string`.
    pub fn string() -> Self {
        Self::new("string", BaseType::String)
    }

    /// String literal type, rendered with JSON escapes.
    pub fn literal(value: &str) -> Self {
        Self::new(quote(value), BaseType::String)
    }

    pub fn unknown(documentation: impl Into<String>) -> Self {
        Self::new("unknown", BaseType::Unknown).documented(documentation)
    }

    /// Empty union: no value is possible.
    pub fn never() -> Self {
        Self::new("never", BaseType::Union)
    }

    /// Zero-width match; only the absent marker.
    pub fn void(marker: &str) -> Self {
        Self {
            nullable: true,
            ..Self::new(marker, BaseType::Unknown)
        }
    }

    pub fn tuple(elements: &[impl AsRef<TypeDescriptor>]) -> Self {
        let parts: Vec<&str> = elements
            .iter()
            .map(|e| e.as_ref().type_string.as_str())
            .collect();
        Self {
            is_array: true,
            ..Self::new(format!("[{}]", parts.join(", ")), BaseType::Tuple)
        }
    }

    /// Union of already de-duplicated, rendered members.
    pub fn union(members: &[String], nullable: bool) -> Self {
        Self {
            nullable,
            ..Self::new(members.join(" | "), BaseType::Union)
        }
    }

    /// `T[]`, keeping the element's base type.
    pub fn array_of(element: &TypeDescriptor) -> Self {
        Self {
            is_array: true,
            ..Self::new(format!("{}[]", element.embedded()), element.base_type)
        }
    }

    /// `T | <marker>`.
    pub fn optional_of(payload: &TypeDescriptor, marker: &str) -> Self {
        Self {
            nullable: true,
            ..Self::new(format!("{} | {marker}", payload.embedded()), BaseType::Union)
        }
    }

    pub fn documented(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Rendering for use inside another type: composites are parenthesized.
    pub fn embedded(&self) -> String {
        if self.base_type.is_composite() {
            format!("({})", self.type_string)
        } else {
            self.type_string.clone()
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_string)
    }
}
