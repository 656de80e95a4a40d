//! DictionaryVariable object implementation.
//!
//! A simple object that stores a named value in a dictionary.

use crate::types::Handle;

// ============================================================================
// DictionaryVariable
// ============================================================================

/// Dictionary variable object.
///
/// A simple object that stores a named value in a dictionary.
/// Used for storing various system and application variables.
///
/// # DXF Information
/// - Object type: DICTIONARYVAR
/// - Subclass marker: DictionaryVariables
/// - DXF codes:
///   - 280: Object schema number
///   - 1: Value string
///
/// # Example
///
/// ```ignore
/// use dxfcore::objects::DictionaryVariable;
///
/// let var = DictionaryVariable::new("CTAB", "Model");
/// assert_eq!(var.value, "Model");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryVariable {
    /// Object handle.
    pub handle: Handle,

    /// Owner handle (the dictionary containing this variable).
    pub owner_handle: Handle,

    /// Object schema number.
    /// DXF code: 280
    pub schema_number: i16,

    /// The variable value.
    /// DXF code: 1
    pub value: String,

    /// Name (optional, typically stored as dictionary key).
    pub name: String,
}

impl DictionaryVariable {
    /// Object type name.
    pub const OBJECT_NAME: &'static str = "DICTIONARYVAR";

    /// Subclass marker.
    pub const SUBCLASS_MARKER: &'static str = "DictionaryVariables";

    /// Creates a new DictionaryVariable with the given name and value.
    pub fn new(name: &str, value: &str) -> Self {
        DictionaryVariable {
            handle: Handle::NULL,
            owner_handle: Handle::NULL,
            schema_number: 0,
            value: value.to_string(),
            name: name.to_string(),
        }
    }

    /// Creates a DictionaryVariable with just a value (no name).
    pub fn with_value(value: &str) -> Self {
        DictionaryVariable {
            handle: Handle::NULL,
            owner_handle: Handle::NULL,
            schema_number: 0,
            value: value.to_string(),
            name: String::new(),
        }
    }

    /// Sets the value.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Returns true if the value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Attempts to parse the value as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        self.value.parse().ok()
    }

    /// Attempts to parse the value as a float.
    pub fn as_f64(&self) -> Option<f64> {
        self.value.parse().ok()
    }

    /// Attempts to parse the value as a boolean.
    ///
    /// Recognizes "0", "1", "true", "false", "yes", "no".
    pub fn as_bool(&self) -> Option<bool> {
        match self.value.to_lowercase().as_str() {
            "1" | "true" | "yes" => Some(true),
            "0" | "false" | "no" => Some(false),
            _ => None,
        }
    }

    /// Creates a variable with an integer value.
    pub fn from_i64(name: &str, value: i64) -> Self {
        Self::new(name, &value.to_string())
    }

    /// Creates a variable with a float value.
    pub fn from_f64(name: &str, value: f64) -> Self {
        Self::new(name, &value.to_string())
    }

    /// Creates a variable with a boolean value.
    pub fn from_bool(name: &str, value: bool) -> Self {
        Self::new(name, if value { "1" } else { "0" })
    }

    // ========================================================================
    // Common System Variables
    // ========================================================================

    /// CTAB - Current tab/layout name.
    pub fn ctab(layout_name: &str) -> Self {
        Self::new("CTAB", layout_name)
    }

    /// CLAYER - Current layer name.
    pub fn clayer(layer_name: &str) -> Self {
        Self::new("CLAYER", layer_name)
    }

    /// DIMSTYLE - Current dimension style name.
    pub fn dimstyle(style_name: &str) -> Self {
        Self::new("DIMSTYLE", style_name)
    }

    /// TEXTSTYLE - Current text style name.
    pub fn textstyle(style_name: &str) -> Self {
        Self::new("TEXTSTYLE", style_name)
    }

    /// CELTSCALE - Current entity linetype scale.
    pub fn celtscale(scale: f64) -> Self {
        Self::from_f64("CELTSCALE", scale)
    }

    /// CECOLOR - Current entity color.
    pub fn cecolor(color_index: i32) -> Self {
        Self::from_i64("CECOLOR", color_index as i64)
    }
}

impl Default for DictionaryVariable {
    fn default() -> Self {
        Self::with_value("")
    }
}

// ============================================================================
// Tests
// ============================================================================
