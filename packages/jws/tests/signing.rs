//! Signing dispatcher behavior across both families

use cryypt_jws::{sign, JwsError, Jws, DEFAULT_ALGORITHM};
use hex_literal::hex;
use rsa::pkcs1v15::{Signature as RsaSignature, VerifyingKey};
use rsa::pkcs8::DecodePublicKey;
use rsa::signature::Verifier;
use rsa::RsaPublicKey;
use sha2::{Sha256, Sha384, Sha512};

const PKCS8_PEM: &str = include_str!("fixtures/rsa_private_pkcs8.pem");
const PKCS1_PEM: &str = include_str!("fixtures/rsa_private_pkcs1.pem");
const PUBLIC_PEM: &str = include_str!("fixtures/rsa_public.pem");
// Produced by `openssl dgst -sha256 -sign` / `-sha512 -sign` over "hello"
const RS256_HELLO: &[u8] = include_bytes!("fixtures/rs256_hello.sig");
const RS512_HELLO: &[u8] = include_bytes!("fixtures/rs512_hello.sig");

fn public_key() -> RsaPublicKey {
    RsaPublicKey::from_public_key_pem(PUBLIC_PEM).expect("fixture public key parses")
}

#[test]
fn test_hs256_known_answer() {
    let signature = sign("hello", "secret", "HS256").expect("HS256 signs");
    assert_eq!(
        signature.as_bytes(),
        hex!("88aab3ede8d3adf94d26ab90d3bafd4a2083070c3bcce9c014ee04a443847c0b")
    );
}

#[test]
fn test_algorithm_name_is_case_insensitive() {
    let upper = sign("hello", "secret", "HS256").expect("HS256 signs");
    let lower = sign("hello", "secret", "hs256").expect("hs256 signs");
    let mixed = sign("hello", "secret", "Hs256").expect("Hs256 signs");
    assert_eq!(upper, lower);
    assert_eq!(upper, mixed);
}

#[test]
fn test_hs256_is_deterministic() {
    let message = b"header.payload";
    let key = b"0123456789abcdef0123456789abcdef";
    let first = sign(message, key, "HS256").expect("HS256 signs");
    let second = sign(message, key, "HS256").expect("HS256 signs");
    assert_eq!(first, second);
}

#[test]
fn test_one_bit_changes_the_signature() {
    let message = b"header.payload".to_vec();
    let key = b"0123456789abcdef".to_vec();
    let baseline = sign(&message, &key, "HS256").expect("HS256 signs");

    let mut flipped_message = message.clone();
    flipped_message[0] ^= 0x01;
    assert_ne!(baseline, sign(&flipped_message, &key, "HS256").expect("HS256 signs"));

    let mut flipped_key = key.clone();
    flipped_key[0] ^= 0x01;
    assert_ne!(baseline, sign(&message, &flipped_key, "HS256").expect("HS256 signs"));
}

#[test]
fn test_hmac_output_lengths() {
    for (algorithm, len) in [("HS256", 32), ("HS384", 48), ("HS512", 64)] {
        let signature = sign("m", "k", algorithm).expect("HMAC signs");
        assert_eq!(signature.len(), len, "{algorithm}");
    }
}

#[test]
fn test_empty_message_and_key_are_accepted() {
    let signature = sign("", "", "HS512").expect("empty HMAC inputs are valid");
    assert_eq!(signature.len(), 64);

    let signature = sign("", PKCS8_PEM, "RS256").expect("empty RSA message is valid");
    assert_eq!(signature.len(), 256);
}

#[test]
fn test_unsupported_algorithm() {
    let err = sign("hello", "secret", "NOPE").unwrap_err();
    assert_eq!(err, JwsError::UnsupportedAlgorithm("NOPE".to_string()));
    assert!(err.is_unsupported_algorithm());

    // "none" is not a signing algorithm here
    assert!(sign("hello", "secret", "none").is_err());
}

#[test]
fn test_rs256_matches_openssl() {
    let signature = sign("hello", PKCS8_PEM, "RS256").expect("RS256 signs");
    assert_eq!(signature.as_bytes(), RS256_HELLO);
}

#[test]
fn test_rs512_matches_openssl() {
    let signature = sign("hello", PKCS8_PEM, "RS512").expect("RS512 signs");
    assert_eq!(signature.as_bytes(), RS512_HELLO);
}

#[test]
fn test_pkcs1_pem_signs_identically() {
    let pkcs8 = sign("hello", PKCS8_PEM, "RS256").expect("PKCS#8 signs");
    let pkcs1 = sign("hello", PKCS1_PEM, "rs256").expect("PKCS#1 signs");
    assert_eq!(pkcs8, pkcs1);
}

#[test]
fn test_rsa_signatures_verify_with_public_key() {
    let message = b"eyJhbGciOiJSUzI1NiJ9.eyJzdWIiOiIxMjM0In0";

    let signature = sign(message, PKCS8_PEM, "RS256").expect("RS256 signs");
    let verifier = VerifyingKey::<Sha256>::new(public_key());
    let parsed = RsaSignature::try_from(signature.as_bytes()).expect("signature parses");
    assert!(verifier.verify(message, &parsed).is_ok());

    let signature = sign(message, PKCS8_PEM, "RS384").expect("RS384 signs");
    let verifier = VerifyingKey::<Sha384>::new(public_key());
    let parsed = RsaSignature::try_from(signature.as_bytes()).expect("signature parses");
    assert!(verifier.verify(message, &parsed).is_ok());

    let signature = sign(message, PKCS8_PEM, "RS512").expect("RS512 signs");
    let verifier = VerifyingKey::<Sha512>::new(public_key());
    let parsed = RsaSignature::try_from(signature.as_bytes()).expect("signature parses");
    assert!(verifier.verify(message, &parsed).is_ok());
}

#[test]
fn test_rsa_with_hmac_secret_fails() {
    let err = sign("hello", "secret", "RS256").unwrap_err();
    match err {
        JwsError::SigningFailed(msg) => assert!(!msg.is_empty()),
        other => panic!("expected SigningFailed, got {other:?}"),
    }
}

#[test]
fn test_rsa_with_empty_key_fails() {
    assert!(matches!(
        sign("hello", "", "RS256"),
        Err(JwsError::SigningFailed(_))
    ));
}

#[test]
fn test_public_key_is_not_a_signing_key() {
    assert!(matches!(
        sign("hello", PUBLIC_PEM, "RS256"),
        Err(JwsError::SigningFailed(_))
    ));
}

#[test]
fn test_builder_defaults_to_hs256() {
    let builder = Jws::signer().with_key("secret");
    assert_eq!(builder.algorithm(), DEFAULT_ALGORITHM);

    let from_builder = builder.sign("hello").expect("builder signs");
    let direct = sign("hello", "secret", "HS256").expect("HS256 signs");
    assert_eq!(from_builder, direct);
}

#[test]
fn test_builder_with_rsa() {
    let signer = Jws::signer().with_algorithm("rs256").with_key(PKCS8_PEM);
    assert_eq!(signer.algorithm().as_str(), "RS256");
    let signature = signer.sign("hello").expect("builder signs");
    assert_eq!(signature.as_bytes(), RS256_HELLO);
}

#[test]
fn test_builder_debug_redacts_key() {
    let signer = Jws::signer().with_key("super-secret-value");
    let rendered = format!("{signer:?}");
    assert!(!rendered.contains("super-secret-value"));
    assert!(rendered.contains("HS256"));
}

#[test]
fn test_builder_rejects_unknown_algorithm() {
    let err = Jws::signer()
        .with_algorithm("ES256K")
        .with_key("secret")
        .sign("hello")
        .unwrap_err();
    assert!(err.is_unsupported_algorithm());
}

#[test]
fn test_builder_error_keeps_name_as_written() {
    let err = Jws::signer()
        .with_algorithm("es256k")
        .with_key("secret")
        .sign("hello")
        .unwrap_err();
    assert_eq!(err, JwsError::UnsupportedAlgorithm("es256k".to_string()));
    assert_eq!(err, sign("hello", "secret", "es256k").unwrap_err());
}

#[test]
fn test_signature_to_base64_url() {
    let signature = sign("hello", "secret", "HS256").expect("HS256 signs");
    let encoded = signature.to_base64_url();
    assert!(!encoded.contains(['+', '/', '=']));
    assert_eq!(
        cryypt_jws::base64_url_decode(&encoded).expect("round trip"),
        signature.into_vec()
    );
}
