//! HTML templates for the rendered chart page.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants for the page chrome
//! - `components` - Base page template and the Plotly bootstrap script

mod components;
mod styles;

pub use components::{base_html, chart_script, html_escape, script_safe_json, CHART_ELEMENT_ID};
pub use styles::STYLE;
