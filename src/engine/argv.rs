// argv.rs - Argument vector for the engine entry point

use std::ffi::CString;
use std::fmt;
use std::os::raw::c_char;

use crate::error::BridgeError;

/// Program name token at position zero of every argument vector
pub const PROGRAM_NAME: &str = "FastTree";

/// Ordered command-line tokens handed to the engine entry point.
///
/// Follows the C calling convention the engine expects: the program token
/// sits at index 0 and the pointer form is terminated by a null sentinel.
/// Token storage is owned here, so the pointer form stays valid for the
/// duration of the call that borrows it.
#[derive(Debug)]
pub struct ArgumentVector {
    tokens: Vec<CString>,
}

impl ArgumentVector {
    pub fn new() -> Self {
        let program = CString::new(PROGRAM_NAME).expect("program token contains no NUL");
        Self {
            tokens: vec![program],
        }
    }

    /// Append one token. Text with an interior NUL byte has no C-string
    /// form and is rejected with the offending text.
    pub fn push(&mut self, token: &str) -> Result<(), BridgeError> {
        let token = CString::new(token)
            .map_err(|_| BridgeError::InvalidArgument(token.to_string()))?;
        self.tokens.push(token);
        Ok(())
    }

    /// Number of real tokens. The null sentinel is not counted.
    pub fn argc(&self) -> usize {
        self.tokens.len()
    }

    /// Token texts in order, program name first
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .map(|t| t.to_str().expect("tokens are built from UTF-8 text"))
    }

    /// Pointer form for the C entry point. The final element is the null
    /// sentinel, so the vector holds argc + 1 pointers.
    pub fn as_argv(&self) -> Vec<*const c_char> {
        let mut argv: Vec<*const c_char> = self.tokens.iter().map(|t| t.as_ptr()).collect();
        argv.push(std::ptr::null());
        argv
    }
}

impl Default for ArgumentVector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ArgumentVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens().collect::<Vec<_>>().join(" "))
    }
}
