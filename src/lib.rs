//! Password generation with a short-circuiting strength ladder.
//!
//! ```
//! use safepass::pass::{self, Class, Request};
//!
//! let generated = pass::create(&Request {
//!     length: 16,
//!     unique_chars: true,
//!     classes: Class::ALL.to_vec(),
//!     include: String::new(),
//!     exclude: "0O1lI".into(),
//! })
//! .unwrap();
//!
//! assert_eq!(generated.password.len(), 16);
//! assert!((0.0..=1.0).contains(&generated.strength));
//! ```

mod error;
pub mod pass;
pub mod settings;
pub mod strength;

pub use error::Error;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
