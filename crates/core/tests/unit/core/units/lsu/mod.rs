//! Load/Store Unit Tests.
