//! Group code -> value-family mapping
//!
//! Every DXF group code belongs to a fixed "family" that determines how its
//! value text is parsed on read and formatted on write. The families are
//! keyed purely by the numeric code range; the specific [`DxfCode`] variant
//! only carries the semantic name.

use super::DxfCode;

/// The value family a group code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupCodeValueType {
    /// A raw text string (includes handles, which are hex-encoded strings).
    String,
    /// A 16-bit signed integer ("short").
    Int16,
    /// A 32-bit signed integer.
    Int32,
    /// A 64-bit signed integer.
    Int64,
    /// A single byte, used for small flag fields (e.g. 280-289).
    Byte,
    /// A double-precision float.
    Double,
    /// A boolean encoded as the short `0`/`1`.
    Bool,
}

impl GroupCodeValueType {
    /// Determine the value family for a code, given its [`DxfCode`] classification.
    pub fn from_code(code: DxfCode) -> Self {
        Self::from_i32(code.to_i32())
    }

    /// Determine the value family directly from the numeric group code.
    ///
    /// Ranges follow the fixed group-code table: 0-9 strings; 10-59 and
    /// 110-149 doubles; 60-79 and 170-179 and 270-289 and 370-409 shorts;
    /// 90-99 and 420-429/440-459 ints; 100-109, 300-369 (handles among
    /// them), 390-419 and 430-439 strings; 290-299 bools; 1000-1071 is the
    /// XData sub-family with its own mapping.
    pub fn from_i32(code: i32) -> Self {
        match code {
            0..=9 => GroupCodeValueType::String,
            10..=59 => GroupCodeValueType::Double,
            60..=79 => GroupCodeValueType::Int16,
            90..=99 => GroupCodeValueType::Int32,
            100..=109 => GroupCodeValueType::String,
            110..=139 => GroupCodeValueType::Double,
            140..=149 => GroupCodeValueType::Double,
            160..=169 => GroupCodeValueType::Int64,
            170..=179 => GroupCodeValueType::Int16,
            210..=239 => GroupCodeValueType::Double,
            270..=279 => GroupCodeValueType::Int16,
            280..=289 => GroupCodeValueType::Byte,
            290..=299 => GroupCodeValueType::Bool,
            300..=309 => GroupCodeValueType::String,
            310..=319 => GroupCodeValueType::String, // binary chunks, hex-encoded
            320..=369 => GroupCodeValueType::String, // handles (soft/hard pointers, owners)
            370..=389 => GroupCodeValueType::Int16,
            390..=399 => GroupCodeValueType::String,
            400..=409 => GroupCodeValueType::Int16,
            410..=419 => GroupCodeValueType::String,
            420..=429 => GroupCodeValueType::Int32,
            430..=439 => GroupCodeValueType::String,
            440..=449 => GroupCodeValueType::Int32,
            450..=459 => GroupCodeValueType::Int32,
            460..=469 => GroupCodeValueType::Double,
            470..=481 => GroupCodeValueType::String,
            999 => GroupCodeValueType::String,
            1000..=1009 => GroupCodeValueType::String,
            1010..=1013 | 1020..=1023 | 1030..=1033 => GroupCodeValueType::Double,
            1040..=1042 => GroupCodeValueType::Double,
            1070 => GroupCodeValueType::Int16,
            1071 => GroupCodeValueType::Int32,
            _ => GroupCodeValueType::String,
        }
    }

    /// For a point-valued code (10/20/30 and its repeated groups 11-18/21-28/31-38,
    /// 110-112/120-122/130-132, or the XData point families 1010-1013/1020-1023/1030-1033),
    /// returns the axis index (0 = X, 1 = Y, 2 = Z). `None` for non-coordinate codes.
    pub fn coordinate_axis(code: DxfCode) -> Option<usize> {
        let c = code.to_i32();
        match c {
            10..=18 | 110..=112 | 1010..=1013 => Some(0),
            20..=28 | 120..=122 | 1020..=1023 => Some(1),
            30..=38 | 130..=132 | 1030..=1033 => Some(2),
            _ => None,
        }
    }

    /// Returns an identifier shared by the X/Y/Z codes of the same coordinate
    /// group (e.g. 10/20/30 share group `0`; 11/21/31 share group `1`).
    pub fn coordinate_group(code: DxfCode) -> Option<usize> {
        let c = code.to_i32();
        match c {
            10..=18 => Some((c - 10) as usize),
            20..=28 => Some((c - 20) as usize),
            30..=38 => Some((c - 30) as usize),
            110..=112 => Some((c - 110) as usize + 100),
            120..=122 => Some((c - 120) as usize + 100),
            130..=132 => Some((c - 130) as usize + 100),
            1010..=1013 => Some((c - 1010) as usize + 1000),
            1020..=1023 => Some((c - 1020) as usize + 1000),
            1030..=1033 => Some((c - 1030) as usize + 1000),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_range() {
        assert_eq!(GroupCodeValueType::from_i32(0), GroupCodeValueType::String);
        assert_eq!(GroupCodeValueType::from_i32(8), GroupCodeValueType::String);
    }

    #[test]
    fn double_range() {
        assert_eq!(GroupCodeValueType::from_i32(10), GroupCodeValueType::Double);
        assert_eq!(GroupCodeValueType::from_i32(40), GroupCodeValueType::Double);
    }

    #[test]
    fn short_range() {
        assert_eq!(GroupCodeValueType::from_i32(62), GroupCodeValueType::Int16);
        assert_eq!(GroupCodeValueType::from_i32(70), GroupCodeValueType::Int16);
    }

    #[test]
    fn int_range() {
        assert_eq!(GroupCodeValueType::from_i32(90), GroupCodeValueType::Int32);
    }

    #[test]
    fn bool_range() {
        assert_eq!(GroupCodeValueType::from_i32(290), GroupCodeValueType::Bool);
    }

    #[test]
    fn xdata_range() {
        assert_eq!(GroupCodeValueType::from_i32(1000), GroupCodeValueType::String);
        assert_eq!(GroupCodeValueType::from_i32(1040), GroupCodeValueType::Double);
        assert_eq!(GroupCodeValueType::from_i32(1070), GroupCodeValueType::Int16);
        assert_eq!(GroupCodeValueType::from_i32(1071), GroupCodeValueType::Int32);
    }

    #[test]
    fn coordinate_axis_groups() {
        assert_eq!(GroupCodeValueType::coordinate_axis(DxfCode::from_i32(10)), Some(0));
        assert_eq!(GroupCodeValueType::coordinate_axis(DxfCode::from_i32(20)), Some(1));
        assert_eq!(GroupCodeValueType::coordinate_axis(DxfCode::from_i32(30)), Some(2));
    }
}
