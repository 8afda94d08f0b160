//! # bidhands Gemini provider
//!
//! Thin client for the Gemini `generateContent` endpoint, shaped for one
//! job: turn a bid prompt into draft proposal text. One request, one
//! response, no retries and no streaming.

pub mod client;
pub mod types;

pub use client::{GeminiClient, DEFAULT_MODEL};
pub use types::{
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, SafetyRating, SafetySetting,
};
