/// Application layer - use cases, read models, presenters and navigation
pub mod dto;
pub mod factories;
pub mod navigation;
pub mod presenters;
pub mod read_models;
pub mod use_cases;
