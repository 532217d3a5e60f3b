pub mod background;
pub mod holes;
pub mod label;

pub use background::background_label;
pub use holes::{count_holes, AdjacencyIndex};
pub use label::{component_cells, component_sizes, label_components};
