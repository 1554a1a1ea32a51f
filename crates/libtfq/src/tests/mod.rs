mod coordinator_config_tests;
mod utils;
