//! AI client module for LLM integration via OpenRouter.
//!
//! This module provides:
//! - `AiClient` trait for abstracting AI providers
//! - `OpenRouterClient` implementation (single attempt, no streaming)
//! - `FakeClient` for tests
//! - Configuration via environment variables
//! - The meal-plan prompt and its output-shape contract
//!
//! # Configuration
//!
//! Set these environment variables:
//!
//! - `OPENROUTER_API_KEY` (required): Your OpenRouter API key
//! - `PREPPLATE_AI_MODEL` (optional): Model name, e.g., "google/gemini-2.5-pro"
//! - `PREPPLATE_AI_BASE_URL` (optional): API base URL

mod client;
mod config;
mod fake;
mod meal_plan;
pub mod prompts;
mod types;

pub use client::{AiClient, AiError, OpenRouterClient};
pub use config::{AiConfig, ConfigError, DEFAULT_MODEL};
pub use fake::FakeClient;
pub use meal_plan::{PlanError, generate_meal_plan};
pub use types::{ChatMessage, ChatRequest, ChatResponse, ResponseSchema, Role, Usage};
