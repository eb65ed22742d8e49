//! Dhara: rule-based dosha assessment for the Ayurveda wellness chatbot.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
