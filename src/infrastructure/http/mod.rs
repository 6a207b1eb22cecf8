//! HTTP implementations of the domain repositories.

mod http_link_repository;

pub use http_link_repository::HttpLinkRepository;
