//! Split a stylesheet into one unit per top-level `@layer` block.
//!
//! ```
//! use css_layer_split::{OTHERS_KEY, split_layers};
//!
//! let split = split_layers("@layer base { .a {} } .b {}").unwrap();
//! assert_eq!(split.layers["base"], "@layer base { .a {} }");
//! assert_eq!(split.layers[OTHERS_KEY], ".b {}");
//! ```

pub mod error;
pub mod output;
pub mod splitter;

pub use error::{OutputError, SplitError, SplitResult};
pub use output::{layer_file_name, write_layer, write_layers};
pub use splitter::{LayerMap, LayerSplit, OTHERS_KEY, split_layers};
