pub mod config;
pub mod huggingface;
pub mod openai;
pub mod traits;

pub use config::{ClientFactory, ProviderConfig, ProviderType};
pub use huggingface::HuggingFaceClient;
pub use openai::OpenAIClient;
pub use traits::{GenerationOptions, GenerationRequest, GenerationResponse, TextGenerator};
