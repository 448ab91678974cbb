#[cfg(test)]
mod tests {
    use hexpng_core::constants::PNG_SIGNATURE;
    use hexpng_core::{Signature, SignatureError};

    #[test]
    fn png_is_default() {
        let sig = Signature::default();
        assert_eq!(sig, Signature::png());
        assert_eq!(sig.as_bytes(), &PNG_SIGNATURE);
        assert_eq!(sig.len(), 8);
        assert_eq!(sig.to_string(), "89504e470d0a1a0a");
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(Signature::new(Vec::new()).unwrap_err(), SignatureError::Empty);
        assert_eq!("  ".parse::<Signature>().unwrap_err(), SignatureError::Empty);
    }

    #[test]
    fn parses_spaced_hex() {
        let sig: Signature = "89 50 4E 47\n0d0a 1a0a".parse().unwrap();
        assert_eq!(sig, Signature::png());
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(matches!("89504".parse::<Signature>(), Err(SignatureError::InvalidHex(_))));
        assert!(matches!("zz".parse::<Signature>(), Err(SignatureError::InvalidHex(_))));
    }

    #[test]
    fn find_in_returns_first_offset() {
        let sig = Signature::new(*b"ab").unwrap();
        assert_eq!(sig.find_in(b"xxabyyab"), Some(2));
        assert_eq!(sig.find_in(b"a"), None);
        assert_eq!(sig.find_in(b""), None);
        assert_eq!(sig.find_in(b"ab"), Some(0));
        assert!(sig.is_prefix_of(b"abc"));
        assert!(!sig.is_prefix_of(b"cab"));
    }
}
