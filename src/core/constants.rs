/// Width and height of a single place cell in degrees
pub const CELL_SIZE_DEG: f64 = 0.01;

/// Tag value carried in the two lowest bits of every generated place ID
pub const PLACE_ID_TAG: u64 = 3;

/// Number of whole-degree values for shifted longitude [0, 360)
pub(crate) const LNG_WHOLE_RANGE: u32 = 360;

/// Number of whole-degree values for shifted latitude [0, 180)
pub(crate) const LAT_WHOLE_RANGE: u32 = 180;

/// Number of hundredth-of-a-degree values per whole degree [0, 100)
pub(crate) const FRAC_RANGE: u32 = 100;

/// Bit offset of each field within a packed place ID
pub(crate) const LNG_WHOLE_SHIFT: u32 = 26;
pub(crate) const LAT_WHOLE_SHIFT: u32 = 18;
pub(crate) const LNG_FRAC_SHIFT: u32 = 10;
pub(crate) const LAT_FRAC_SHIFT: u32 = 2;

/// Extraction masks. Wider than the fields strictly need, so decoding
/// re-validates every extracted value against its range.
pub(crate) const LNG_WHOLE_MASK: u64 = 0xFFFF;
pub(crate) const FIELD_MASK: u64 = 0xFF;

/// Smallest integer that decodes to a block place (the cell at -180, -90)
pub const MIN_PLACE_ID: u64 = PLACE_ID_TAG;

/// Largest place ID producible from in-range fields (the cell at 179.99, 89.99)
pub const MAX_PLACE_ID: u64 = ((LNG_WHOLE_RANGE as u64 - 1) << LNG_WHOLE_SHIFT)
    | ((LAT_WHOLE_RANGE as u64 - 1) << LAT_WHOLE_SHIFT)
    | ((FRAC_RANGE as u64 - 1) << LNG_FRAC_SHIFT)
    | ((FRAC_RANGE as u64 - 1) << LAT_FRAC_SHIFT)
    | PLACE_ID_TAG;
