//! Console collaborators: prompts and renderers.

pub mod input;
pub mod output;

pub use input::{parse_bridge_size, parse_move, parse_retry, InputView};
pub use output::{render_map, render_result, JsonView, OutputView};
