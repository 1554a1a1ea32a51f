mod boundary_message_tests;
mod error_token_extractor_tests;
mod field_catalog_tests;
mod suggestion_context_tests;
mod utils;
