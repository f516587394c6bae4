//! Layout: sizing units, flex resolution, and the two-pane split.

pub mod dimension;
pub mod flex;
pub mod split;

pub use dimension::{Constraints, Dimension};
pub use flex::{Align, Direction, Flex, LayoutItem};
pub use split::{BorderJunctionProvider, JunctionKind, JunctionPoint, SplitDirection, SplitLayout};
