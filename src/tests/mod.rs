mod cli_context_tests;
mod memory_store;
