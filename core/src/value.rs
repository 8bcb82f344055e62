//! Member value types for VETO annotations.
//!
//! Values are the data carried by annotation members. VETO supports scalar
//! types (Bool, Int, Float, Str), type references, enum constants and
//! arrays of values.

use crate::TypeName;
use std::fmt;

/// A value carried by an annotation member.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberValue {
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Reference to a type (e.g. a validator implementation).
    TypeRef(TypeName),
    /// Enum constant reference.
    EnumConst {
        /// Enum type name.
        type_name: TypeName,
        /// Constant name.
        constant: String,
    },
    /// Array of values.
    Array(Vec<MemberValue>),
}

impl MemberValue {
    /// Create a type reference value.
    pub fn type_ref(name: impl Into<TypeName>) -> Self {
        MemberValue::TypeRef(name.into())
    }

    /// Create an enum constant value.
    pub fn enum_const(type_name: impl Into<TypeName>, constant: impl Into<String>) -> Self {
        MemberValue::EnumConst {
            type_name: type_name.into(),
            constant: constant.into(),
        }
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, MemberValue::Bool(_))
    }

    /// Returns true if this is an integer value.
    pub fn is_int(&self) -> bool {
        matches!(self, MemberValue::Int(_))
    }

    /// Returns true if this is a float value.
    pub fn is_float(&self) -> bool {
        matches!(self, MemberValue::Float(_))
    }

    /// Returns true if this is a string value.
    pub fn is_str(&self) -> bool {
        matches!(self, MemberValue::Str(_))
    }

    /// Returns true if this is a type reference.
    pub fn is_type_ref(&self) -> bool {
        matches!(self, MemberValue::TypeRef(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, MemberValue::Array(_))
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MemberValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            MemberValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            MemberValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string reference if this is a Str value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MemberValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the referenced type name if this is a TypeRef value.
    pub fn as_type_ref(&self) -> Option<&TypeName> {
        match self {
            MemberValue::TypeRef(name) => Some(name),
            _ => None,
        }
    }

    /// Get the element slice if this is an Array value.
    pub fn as_array(&self) -> Option<&[MemberValue]> {
        match self {
            MemberValue::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for MemberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberValue::Bool(b) => write!(f, "{}", b),
            MemberValue::Int(i) => write!(f, "{}", i),
            MemberValue::Float(fl) => write!(f, "{}", fl),
            MemberValue::Str(s) => write!(f, "\"{}\"", s),
            MemberValue::TypeRef(name) => write!(f, "{}.class", name),
            MemberValue::EnumConst {
                type_name,
                constant,
            } => write!(f, "{}.{}", type_name, constant),
            MemberValue::Array(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Convenient From implementations
impl From<bool> for MemberValue {
    fn from(b: bool) -> Self {
        MemberValue::Bool(b)
    }
}

impl From<i64> for MemberValue {
    fn from(i: i64) -> Self {
        MemberValue::Int(i)
    }
}

impl From<i32> for MemberValue {
    fn from(i: i32) -> Self {
        MemberValue::Int(i as i64)
    }
}

impl From<f64> for MemberValue {
    fn from(f: f64) -> Self {
        MemberValue::Float(f)
    }
}

impl From<String> for MemberValue {
    fn from(s: String) -> Self {
        MemberValue::Str(s)
    }
}

impl From<&str> for MemberValue {
    fn from(s: &str) -> Self {
        MemberValue::Str(s.to_string())
    }
}

impl From<TypeName> for MemberValue {
    fn from(name: TypeName) -> Self {
        MemberValue::TypeRef(name)
    }
}

impl From<Vec<MemberValue>> for MemberValue {
    fn from(items: Vec<MemberValue>) -> Self {
        MemberValue::Array(items)
    }
}

/// Type alias for member value storage.
pub type MemberValues = std::collections::HashMap<String, MemberValue>;

/// Helper macro to create member value maps.
#[macro_export]
macro_rules! members {
    () => {
        std::collections::HashMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = std::collections::HashMap::new();
            $(
                map.insert($key.to_string(), $crate::MemberValue::from($value));
            )+
            map
        }
    };
}
