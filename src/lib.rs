//! Integration test harness for the pidigit workspace.
