/// Error type for placegrid-rs operations.
#[derive(Debug, PartialEq)]
pub enum PlaceGridError {
    /// A coordinate or decomposed block place is outside the representable range.
    InvalidCoordinate(String),
    /// A block size smaller than 1 was requested.
    InvalidSize(u32),
}

impl std::fmt::Display for PlaceGridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceGridError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            PlaceGridError::InvalidSize(size) => write!(f, "Invalid block size: {}", size),
        }
    }
}

impl std::error::Error for PlaceGridError {}
