//! Inference policies.

use serde::Serialize;

/// How the absent marker is spelled in rendered types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum VoidType {
    /// `undefined` - the absence of a value
    #[default]
    Undefined,
    /// `null` - explicit null value
    Null,
}

impl VoidType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
        }
    }
}

/// Policies controlling how precise inferred types are.
///
/// Options take part in the structural cache key, so one engine can serve
/// several policy sets without mixing results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TypeInferenceOptions {
    /// Repetitions become `T[]` instead of their element type.
    pub(crate) infer_array_types: bool,
    /// Choices become unions instead of `string`.
    pub(crate) infer_union_types: bool,
    /// Sequences become tuples instead of `string`.
    pub(crate) infer_object_types: bool,
    pub(crate) void_type: VoidType,
}

impl Default for TypeInferenceOptions {
    fn default() -> Self {
        Self {
            infer_array_types: true,
            infer_union_types: true,
            infer_object_types: true,
            void_type: VoidType::default(),
        }
    }
}

impl TypeInferenceOptions {
    /// Create options with every precise policy enabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infer_array_types(mut self, value: bool) -> Self {
        self.infer_array_types = value;
        self
    }

    pub fn infer_union_types(mut self, value: bool) -> Self {
        self.infer_union_types = value;
        self
    }

    pub fn infer_object_types(mut self, value: bool) -> Self {
        self.infer_object_types = value;
        self
    }

    /// Set the absent-marker spelling.
    pub fn void_type(mut self, value: VoidType) -> Self {
        self.void_type = value;
        self
    }
}
