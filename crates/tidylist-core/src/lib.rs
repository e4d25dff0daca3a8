//! Core domain types for Tidylist: the task entity and the in-memory
//! registry that owns it. No I/O lives here; the CLI crate is the only
//! caller.

pub mod registry;
pub mod task;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::version;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
