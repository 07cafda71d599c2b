//! Remote record store access

mod client;

pub use client::RecordStoreClient;
