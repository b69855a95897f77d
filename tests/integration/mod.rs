mod basic_integration;
mod concurrency;
mod shell;
