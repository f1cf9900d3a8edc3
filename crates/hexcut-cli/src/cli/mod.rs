//! CLI command implementations.
//!
//! - `board` - render one board variant
//! - `pieces` - render one piece sheet variant
//! - `batch` - render every job of a YAML batch file
//! - `standard` - render the full published set
//! - `example` - print an example batch file

pub mod batch;
pub mod board;
pub mod common;
pub mod pieces;
pub mod standard;

pub use batch::{cmd_batch, print_example};
pub use board::{BoardArgs, cmd_board};
pub use pieces::{PiecesArgs, cmd_pieces};
pub use standard::{StandardArgs, cmd_standard};
