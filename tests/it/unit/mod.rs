//! Unit tests for fridgeboard.

mod collision_tests;
