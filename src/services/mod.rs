pub mod chatbot;
pub mod recommender;
