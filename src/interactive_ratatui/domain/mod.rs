pub mod models;
pub mod summary;
pub mod watched;

#[cfg(test)]
mod watched_test;
