#![forbid(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod demo;
pub mod drive_link;
pub mod export;
pub mod fetcher;
pub mod formats;
pub mod logging;
pub mod mapper;
pub mod tokenizer;

pub use demo::demo_catalog;
pub use drive_link::normalize_image_link;
pub use export::csv_template;
pub use fetcher::CatalogFetcher;
pub use formats::Print;
