//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod webtoon_repo;

pub use webtoon_repo::WebtoonRepo;
