//! HTTP and HTML front end for the Marquee movie catalog.

pub mod api;
pub mod metrics;
pub mod state;
