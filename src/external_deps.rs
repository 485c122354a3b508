pub use axum::{
    Router,
    extract::Path as AxumPath,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
pub use chrono::{Datelike, Duration as ChronoDuration, NaiveDate, NaiveDateTime};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, Naming, Record,
};
pub use num_format::{Locale, ToFormattedString};
pub use once_cell::sync::Lazy as once_lazy;
