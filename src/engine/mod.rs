// mod.rs - Engine seam module

pub mod argv;
pub mod traits;

#[cfg(feature = "native")]
pub mod native;

// Re-export main types for convenience
pub use argv::{ArgumentVector, PROGRAM_NAME};
pub use traits::TreeEngine;

#[cfg(feature = "native")]
pub use native::NativeFastTree;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;

    #[test]
    fn test_new_vector_is_program_token_plus_sentinel() {
        let argv = ArgumentVector::new();
        assert_eq!(argv.argc(), 1);
        assert_eq!(argv.tokens().collect::<Vec<_>>(), vec![PROGRAM_NAME]);

        let pointers = argv.as_argv();
        assert_eq!(pointers.len(), 2);
        assert!(pointers[1].is_null());
        assert!(!pointers[0].is_null());
    }

    #[test]
    fn test_push_keeps_order_and_sentinel() {
        let mut argv = ArgumentVector::new();
        argv.push("-gtr").unwrap();
        argv.push("-nt").unwrap();

        assert_eq!(argv.argc(), 3);
        assert_eq!(
            argv.tokens().collect::<Vec<_>>(),
            vec!["FastTree", "-gtr", "-nt"]
        );

        let pointers = argv.as_argv();
        assert_eq!(pointers.len(), 4);
        assert!(pointers[3].is_null());
    }

    #[test]
    fn test_interior_nul_is_rejected_with_the_offending_text() {
        let mut argv = ArgumentVector::new();
        let err = argv.push("bad\0arg").unwrap_err();
        assert_eq!(err, BridgeError::InvalidArgument("bad\0arg".to_string()));
        // The failed push leaves the vector untouched
        assert_eq!(argv.argc(), 1);
    }

    #[test]
    fn test_display_joins_tokens() {
        let mut argv = ArgumentVector::new();
        argv.push("-wag").unwrap();
        assert_eq!(argv.to_string(), "FastTree -wag");
    }
}
