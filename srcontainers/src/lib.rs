//! Self-returning variants of the standard containers.
//!
//! Every operation of [`SRDeque`], [`SRDict`] and [`SRList`] that would naturally return nothing returns the
//! container itself instead, so calls can be chained inside a single closure expression:
//!
//! ```
//! use srcontainers::*;
//! let mut list = SRList::new();
//! assert_eq!(list.append(3).append(1).sort().len(), 2);
//! ```
pub mod error;
pub use error::*;
pub mod index;
#[macro_use]
pub mod mutate_return;
pub use mutate_return::*;
pub mod logging;
pub mod deque;
pub use deque::*;
#[macro_use]
pub mod dict;
pub use dict::*;
pub mod list;
pub use list::*;
