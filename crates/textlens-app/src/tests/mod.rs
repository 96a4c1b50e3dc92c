mod io_tests;
mod support;
