//! DXF version identifiers (`$ACADVER` values).

/// DXF version enumeration, ordered chronologically so comparison operators
/// express "at least this new" version gates directly (`self.version < DxfVersion::AC1021`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DxfVersion {
    /// Unknown or unrecognized version string.
    Unknown,
    /// AutoCAD R9 (AC1004)
    AC1004,
    /// AutoCAD R10 (AC1006)
    AC1006,
    /// AutoCAD R11 / R12 (AC1009). R11 and R12 share the same `$ACADVER` value.
    AC1009,
    /// AutoCAD R13 (AC1012). First version with the CLASSES/OBJECTS sections.
    AC1012,
    /// AutoCAD R14 (AC1014)
    AC1014,
    /// AutoCAD 2000 (AC1015)
    AC1015,
    /// AutoCAD 2004 (AC1018)
    AC1018,
    /// AutoCAD 2007 (AC1021). First version to default to UTF-8 ($DWGCODEPAGE ignored).
    AC1021,
    /// AutoCAD 2010 (AC1024)
    AC1024,
    /// AutoCAD 2013 (AC1027)
    AC1027,
    /// AutoCAD 2018 (AC1032)
    AC1032,
}

impl DxfVersion {
    /// Get the version string (e.g., "AC1015")
    pub fn as_str(&self) -> &'static str {
        match self {
            DxfVersion::Unknown => "UNKNOWN",
            DxfVersion::AC1004 => "AC1004",
            DxfVersion::AC1006 => "AC1006",
            DxfVersion::AC1009 => "AC1009",
            DxfVersion::AC1012 => "AC1012",
            DxfVersion::AC1014 => "AC1014",
            DxfVersion::AC1015 => "AC1015",
            DxfVersion::AC1018 => "AC1018",
            DxfVersion::AC1021 => "AC1021",
            DxfVersion::AC1024 => "AC1024",
            DxfVersion::AC1027 => "AC1027",
            DxfVersion::AC1032 => "AC1032",
        }
    }

    /// Get the `$ACADVER` string to write in the HEADER section.
    pub fn to_dxf_string(&self) -> &'static str {
        self.as_str()
    }

    /// Parse a version from its `$ACADVER` string (e.g., "AC1015").
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AC1004" => Some(DxfVersion::AC1004),
            "AC1006" => Some(DxfVersion::AC1006),
            "AC1009" => Some(DxfVersion::AC1009),
            "AC1012" => Some(DxfVersion::AC1012),
            "AC1014" => Some(DxfVersion::AC1014),
            "AC1015" => Some(DxfVersion::AC1015),
            "AC1018" => Some(DxfVersion::AC1018),
            "AC1021" => Some(DxfVersion::AC1021),
            "AC1024" => Some(DxfVersion::AC1024),
            "AC1027" => Some(DxfVersion::AC1027),
            "AC1032" => Some(DxfVersion::AC1032),
            _ => None,
        }
    }

    /// Parse a version string. A `$ACADVER` value newer than the newest
    /// version this crate knows about is clamped to that newest version
    /// (matching AutoCAD's own permissive handling of forward-declared
    /// versions); anything that isn't a recognized `AC1xxx` shape at all,
    /// or predates [`DxfVersion::AC1004`] (R9, the oldest version this
    /// crate understands), falls back to [`DxfVersion::Unknown`].
    pub fn from_version_string(s: &str) -> Self {
        if let Some(v) = Self::parse(s) {
            return v;
        }
        if let Some(digits) = s.strip_prefix("AC1") {
            if let Ok(code) = digits.parse::<u32>() {
                if code > 32 {
                    return DxfVersion::AC1032;
                }
            }
        }
        DxfVersion::Unknown
    }

    /// `true` once `CLASSES`/`OBJECTS` sections are part of the file grammar.
    pub fn supports_classes_and_objects(&self) -> bool {
        *self >= DxfVersion::AC1012
    }
}

impl std::fmt::Display for DxfVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_roundtrip() {
        assert_eq!(DxfVersion::AC1015.as_str(), "AC1015");
        assert_eq!(DxfVersion::AC1032.to_string(), "AC1032");
        assert_eq!(DxfVersion::from_version_string("AC1015"), DxfVersion::AC1015);
        assert_eq!(DxfVersion::from_version_string("GARBAGE"), DxfVersion::Unknown);
    }

    #[test]
    fn newer_than_known_clamps_to_newest() {
        assert_eq!(DxfVersion::from_version_string("AC1050"), DxfVersion::AC1032);
    }

    #[test]
    fn pre_r9_is_unknown() {
        assert_eq!(DxfVersion::from_version_string("AC1003"), DxfVersion::Unknown);
    }

    #[test]
    fn pre_r13_versions_are_recognized() {
        assert_eq!(DxfVersion::from_version_string("AC1004"), DxfVersion::AC1004);
        assert_eq!(DxfVersion::from_version_string("AC1006"), DxfVersion::AC1006);
        assert_eq!(DxfVersion::from_version_string("AC1009"), DxfVersion::AC1009);
        assert!(DxfVersion::AC1004 < DxfVersion::AC1006);
        assert!(DxfVersion::AC1006 < DxfVersion::AC1009);
        assert!(DxfVersion::AC1009 < DxfVersion::AC1012);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(DxfVersion::parse("AC1018"), Some(DxfVersion::AC1018));
        assert_eq!(DxfVersion::parse("INVALID"), None);
    }

    #[test]
    fn ordering_gates_version_features() {
        assert!(DxfVersion::Unknown < DxfVersion::AC1012);
        assert!(DxfVersion::AC1012 < DxfVersion::AC1021);
        assert!(!DxfVersion::Unknown.supports_classes_and_objects());
        assert!(DxfVersion::AC1015.supports_classes_and_objects());
    }
}
