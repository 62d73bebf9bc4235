// Entry point for the constant-time tests; the tests live in tests/constant_time/

mod constant_time;
