pub mod document_service;
pub mod generation_service;
pub mod model_service;
pub mod prompt_builder;
pub mod quiz_service;
pub mod response_parser;
