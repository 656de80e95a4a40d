//! `CLASSES` section — custom/proxy object class definitions.
//!
//! AutoCAD registers a `CLASS` record for every non-fixed object or entity
//! type a drawing uses (ObjectARX extensions, proxy objects, and a handful
//! of built-in types that only appear here when actually present in the
//! file). The library does not instantiate any of these as typed entities;
//! it keeps the records so a file that declares extension classes round-trips
//! without losing them.

/// A single `CLASS` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DxfClass {
    /// DXF record name used by `0` group tags that reference this class.
    pub dxf_name: String,
    /// C++ class name as registered with the application.
    pub cpp_class_name: String,
    /// Name of the application that registered the class.
    pub application_name: String,
    /// Proxy capabilities flags (group 90).
    pub proxy_flags: i32,
    /// Number of instances of this class in the drawing (informational).
    pub instance_count: i32,
    /// `true` if instances were saved as a proxy object.
    pub was_a_proxy: bool,
    /// `true` if this class represents an entity (vs. a non-graphical object).
    pub is_an_entity: bool,
}

impl DxfClass {
    /// Construct a class record with the two required identifying names.
    pub fn new(dxf_name: impl Into<String>, cpp_class_name: impl Into<String>) -> Self {
        Self {
            dxf_name: dxf_name.into(),
            cpp_class_name: cpp_class_name.into(),
            application_name: String::from("ObjectDBX Classes"),
            proxy_flags: 0,
            instance_count: 0,
            was_a_proxy: false,
            is_an_entity: false,
        }
    }
}

/// The ordered set of `CLASS` records declared by a document's `CLASSES` section.
#[derive(Debug, Clone, Default)]
pub struct DxfClassCollection {
    classes: Vec<DxfClass>,
}

impl DxfClassCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of declared classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// `true` if no classes are declared.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Append a class record, preserving file order.
    pub fn add(&mut self, class: DxfClass) {
        self.classes.push(class);
    }

    /// Look up a class record by its DXF record name.
    pub fn get(&self, dxf_name: &str) -> Option<&DxfClass> {
        self.classes.iter().find(|c| c.dxf_name == dxf_name)
    }

    /// Iterate over declared classes in file order.
    pub fn iter(&self) -> impl Iterator<Item = &DxfClass> {
        self.classes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        let classes = DxfClassCollection::new();
        assert!(classes.is_empty());
        assert_eq!(classes.len(), 0);
    }

    #[test]
    fn add_and_lookup() {
        let mut classes = DxfClassCollection::new();
        classes.add(DxfClass::new("ACDBPLACEHOLDER", "AcDbPlaceHolder"));
        assert_eq!(classes.len(), 1);
        assert!(classes.get("ACDBPLACEHOLDER").is_some());
        assert!(classes.get("MISSING").is_none());
    }

    #[test]
    fn preserves_insertion_order() {
        let mut classes = DxfClassCollection::new();
        classes.add(DxfClass::new("A", "AcDbA"));
        classes.add(DxfClass::new("B", "AcDbB"));
        let names: Vec<_> = classes.iter().map(|c| c.dxf_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
