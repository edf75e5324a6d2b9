//! theme-refactor library for rewriting deprecated color-API usages.
//!
//! This library provides programmatic access to the batch rewriting
//! functionality. The core workflow involves three phases:
//!
//! 1. **Scanning**: Expand the widget glob and collect candidate `.dart` files
//! 2. **Transforming**: Insert the theme import where needed, then run the
//!    ordered substitution rules over the buffer
//! 3. **Rewriting**: Write files back only when their content changed
//!
//! # Example
//!
//! ```no_run
//! use theme_refactor::{rewriter, scanner};
//! use std::path::Path;
//!
//! // Collect widget sources under the project root
//! let files = scanner::collect_widget_files(Path::new("."), scanner::DEFAULT_PATTERN).unwrap();
//!
//! // Dry run: compute changes without touching disk
//! let (reports, diagnostics) = rewriter::process_batch(&files, false);
//!
//! println!("{} of {} files would change", diagnostics.files_changed, diagnostics.files_scanned);
//! for report in &reports {
//!     println!("{}", report.file.display());
//! }
//! ```

pub mod cli;
pub mod imports;
pub mod rewriter;
pub mod rules;
pub mod scanner;

// Re-export commonly used types at crate root
pub use rewriter::{DetectionResult, Diagnostics, FileReport, Outcome, PendingChange};
pub use rules::RewriteRule;
