pub mod math_tests;
