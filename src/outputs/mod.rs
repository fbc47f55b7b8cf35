//! Output generation modules for the JSON snapshot and the HTML brief.
//!
//! # Submodules
//!
//! - [`json`]: Writes the flat article list to `latest_news.json` plus a
//!   timestamped backup
//! - [`html`]: Renders the static `index.html` brief from a `Briefing`
//!
//! # Output Structure
//!
//! ```text
//! data_output_dir/
//! ├── latest_news.json
//! └── drone_intelligence_20250506_143000.json
//!
//! site_output_dir/
//! └── index.html
//! ```

pub mod html;
pub mod json;
