pub mod movie;

pub use movie::{MovieDetail, MovieSummary, UserRating, WatchedEntry};
