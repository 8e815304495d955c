//! `dotf` — Read, write, check and delete a JSON dotfile.
//!
//! A [`Dotfile`] handle points at `<directory>/.<name>`, where a directory
//! starting with `~` stands for the user's home directory. The handle offers
//! four async operations: `exists`, `read`, `write` and `delete`.
//!
//! Provides:
//! - `handle` — The `Dotfile` handle and its async operations
//! - `path` — Dotfile path resolution (tilde, dot prefix, join)
//! - `platform` — Injectable home directory and permission capability
//! - `store` — Blocking JSON read/write primitives over one path
//!
//! ```no_run
//! # async fn demo() -> dotf::Result<()> {
//! let rc = dotf::Dotfile::new("~", "myrc")?;
//! rc.write(serde_json::json!({"count": 1})).await?;
//! let value: serde_json::Value = rc.read().await?;
//! assert_eq!(value["count"], 1);
//! assert!(rc.exists().await?);
//! rc.delete().await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handle;
pub mod path;
pub mod platform;
pub mod store;

pub use error::{DotfileError, Result};
pub use handle::Dotfile;
pub use platform::Platform;
pub use store::Format;
