//! Cross-module tests for the material contract
