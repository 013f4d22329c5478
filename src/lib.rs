//! Pure, non-mutating path navigation and enumerable algorithms over
//! JSON-shaped data.
//!
//! `keypath` operates on two container shapes — sequences (arrays) and
//! mappings (objects, with insertion-order iteration) — nested to any
//! depth, with scalar leaves. Its core is a single recursive primitive,
//! [`get_and_update_in`], that can read, replace, delete, or transform a
//! value at an arbitrary path without mutating any level of the input;
//! every other path operation is a fixed transform plugged into it.
//!
//! # Core Concepts
//!
//! - **Path**: a sequence of [`Seg`] segments (mapping keys and signed
//!   sequence indices; negative indices address from the end)
//! - **Outcome**: the `Continue`/`Delete` contract a path-terminal
//!   transform returns
//! - **Kind**: the closed sequence/mapping/scalar classification every
//!   operation dispatches on
//! - **Enumerable view**: a mapping enumerates as its `[key, value]`
//!   pairs, so the algorithms in [`enumerable`] run over both shapes
//!
//! # Purity
//!
//! Every operation is a pure function of its arguments: inputs are taken
//! by reference and never modified, results are newly built values, and a
//! write that would store an equal value returns the container unchanged.
//! There is no shared state, no I/O, and no suspension point, so calls are
//! safe from any number of independent call sites.
//!
//! # Quick Start
//!
//! ```
//! use keypath::{get_in, put_in, pop_in, equals, path};
//! use serde_json::json;
//!
//! let root = json!({"users": [{"name": "ada", "langs": ["en"]}]});
//!
//! let name = get_in(&root, &path!("users", 0, "name")).unwrap();
//! assert_eq!(name, json!("ada"));
//!
//! let updated = put_in(&root, &path!("users", 0, "langs", -1), json!("fr")).unwrap();
//! assert_eq!(
//!     get_in(&updated, &path!("users", 0, "langs")).unwrap(),
//!     json!(["fr"]),
//! );
//!
//! let trimmed = pop_in(&updated, &path!("users", 0, "langs")).unwrap();
//! assert!(equals(&trimmed, &json!({"users": [{"name": "ada"}]})));
//!
//! // the original root was never touched
//! assert_eq!(root, json!({"users": [{"name": "ada", "langs": ["en"]}]}));
//! ```
//!
//! # Reads degrade, writes check
//!
//! Absent keys and out-of-bounds indices are not errors for [`get_in`]
//! (null) or [`pop_in`] (root unchanged). Contract violations — an empty
//! path, or a segment aimed at the wrong container kind — fail the call
//! with a [`KeypathError`].

mod equality;
mod error;
mod inspect;
mod navigate;
mod path;
mod value;

pub mod enumerable;

// Core types
pub use equality::equals;
pub use error::{KeypathError, KeypathResult};
pub use inspect::inspect;
pub use navigate::{
    get_and_update_in, get_in, pop_in, put_in, update_in, Outcome, MAX_PATH_DEPTH,
};
pub use path::{Path, Seg};
pub use value::{classify, kind_name, map_of, Kind};

// Re-export serde_json::Value for convenience
pub use serde_json::Value;
