/// Served at `/static/course.css`.
pub const COURSE_CSS: &str = include_str!("../../assets/course.css");

/// Served at `/static/reveal.js`; reads the page's `data-reveal-threshold`.
pub const REVEAL_JS: &str = include_str!("../../assets/reveal.js");
