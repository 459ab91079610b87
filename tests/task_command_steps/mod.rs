//! Step definitions for task command protocol scenarios.

mod when;
