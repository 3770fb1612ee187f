// Kernel test module
#[cfg(test)]
mod error_tests;
