mod client;

pub use client::HuggingFaceClient;
