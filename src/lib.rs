//! # Collection Idioms
//!
//! Small, self-contained iteration and collection building blocks.
//!
//! ## Modules
//!
//! - [`counter`]: restartable bounded counter with an explicit
//!   begin-traversal / produce-next protocol
//! - [`generator`]: lazy generator-style sequences
//! - [`divmod`]: named floor-division quotient and remainder
//! - [`mapping`]: default insertion, insertion-ordered maps, chained lookup
//! - [`frequency`]: occurrence counting
//! - [`pipeline`]: map, filter, reduce, comprehensions and zipping
//! - [`task`]: asynchronous sleep-and-return
//! - [`config`]: TOML settings for the `tour` binary
//!
//! ## Running the Tour
//!
//! ```bash
//! RUST_LOG=info cargo run --bin tour -- tour.toml
//! cargo run --bin tour -- -vv
//! ```

pub mod config;
pub mod counter;
pub mod divmod;
pub mod error;
pub mod frequency;
pub mod generator;
pub mod mapping;
pub mod pipeline;
pub mod task;

pub use config::TourConfig;
pub use counter::{BoundedCounter, Step, Traversal, TraversalState};
pub use divmod::{divmod, DivMod};
pub use error::{Error, Result};
pub use frequency::{letter_counts, Frequencies};
pub use mapping::{set_default, ChainMap, DefaultInsert, OrderedMap};
