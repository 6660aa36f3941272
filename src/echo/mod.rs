//! Echo transform.
//!
//! A trait-based seam over the identity function so the HTTP layer can be
//! tested against a mock.


#[cfg(test)]
use mockall::automock;

/// Transform applied to validated echo input. Can be mocked in tests.
#[cfg_attr(test, automock)]
pub trait Echo {
    /// Return the response body for `input`.
    fn echo(&self, input: &str) -> String;
}

/// Production implementation: returns its input unchanged.
///
/// Absent input is handled by the caller with `Option::map`, which keeps
/// `None` as `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityEcho;

impl IdentityEcho {
    pub fn new() -> Self {
        Self
    }
}

impl Echo for IdentityEcho {
    fn echo(&self, input: &str) -> String {
        input.to_owned()
    }
}
