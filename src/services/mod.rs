pub mod chatbot;
pub mod gemini;
pub mod system_prompt;
