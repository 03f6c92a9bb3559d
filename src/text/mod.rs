//! Text processing module for normalization, word segmentation and sentence segmentation.

mod normalizer;
mod segmenter;
mod tokenizer;

pub use normalizer::Normalizer;
pub use segmenter::SentenceSegmenter;
pub use tokenizer::Tokenizer;
