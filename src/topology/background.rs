use crate::core::{Label, LabelGrid, PaddedGrid};

/// Label of the exterior background.
///
/// Padding makes the whole outer ring background and connected, so the
/// top-left corner always belongs to the exterior region. Only that one
/// cell is read.
pub fn background_label(padded: &PaddedGrid, labels: &LabelGrid) -> Label {
    debug_assert_eq!((padded.height(), padded.width()), (labels.height(), labels.width()));
    labels.rows()[0][0]
}
