pub mod fetch_service;
pub mod title_service;

#[cfg(test)]
mod title_service_test;
#[cfg(test)]
pub(crate) mod stub_provider;
