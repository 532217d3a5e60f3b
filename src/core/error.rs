use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphError {
    EmptyInput,
    RaggedRows { row: usize, expected: usize, actual: usize },
    InvalidCell { row: usize, col: usize, value: u8 },
    SizeMismatch { expected: usize, actual: usize },
    Parse(String),
    Image(String),
    Config(String),
    Io(String),
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input: grid has zero width or height"),
            Self::RaggedRows { row, expected, actual } => {
                write!(f, "ragged grid: row {} has {} cells, expected {}", row, actual, expected)
            }
            Self::InvalidCell { row, col, value } => {
                write!(f, "invalid cell ({}, {}): value {} is not 0 or 1", row, col, value)
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {}, got {}", expected, actual)
            }
            Self::Parse(msg) => write!(f, "parse error: {}", msg),
            Self::Image(msg) => write!(f, "image error: {}", msg),
            Self::Config(msg) => write!(f, "config error: {}", msg),
            Self::Io(msg) => write!(f, "io error: {}", msg),
        }
    }
}

impl std::error::Error for GlyphError {}

impl From<std::io::Error> for GlyphError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GlyphError>;
