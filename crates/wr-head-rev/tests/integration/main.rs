// Copyright 2026 Oxide Computer Company

//! Integration tests for wr-head-rev.

mod extract;
