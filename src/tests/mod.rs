pub mod stream_tests;
pub mod challenge_tests;
