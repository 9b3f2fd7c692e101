mod compiler_tests;
mod quote_tests;
