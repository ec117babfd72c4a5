mod fetcher_rest;

pub use fetcher_rest::*;
