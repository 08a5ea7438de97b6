// Topic analytics — label folding and per-topic aggregation.

pub mod aggregate;
pub mod canonical;
pub mod models;
pub mod traits;
