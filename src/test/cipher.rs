use crate::{
    cipher::{Cipher, SecurityLevel},
    field::FieldElement,
    key::{MasterKey, Nonce},
    linear::STATE_SIZE,
};

const P: u64 = 65579;

fn keyed(level: SecurityLevel, m: usize) -> Cipher {
    let mut cipher = Cipher::new(P, level, m).unwrap();
    let key = MasterKey::from_slice(&[FieldElement::ONE; STATE_SIZE]).unwrap();
    let nonce = Nonce::new(vec![1u8, 2, 3, 4]);
    cipher.init(key, nonce).unwrap();
    cipher
}

#[test]
fn new_rejects_oversized_truncation() {
    assert!(Cipher::new(P, SecurityLevel::Sec80, 37).is_err());
}

#[test]
fn new_rejects_invalid_modulus() {
    assert!(Cipher::new(65536, SecurityLevel::Sec80, 12).is_err());
}

#[test]
fn uninitialized_cipher_refuses_to_generate() {
    let mut cipher = Cipher::new(P, SecurityLevel::Sec80, 12).unwrap();
    assert!(cipher.generate_keystream(1).is_err());
    assert!(cipher.generate_block(0).is_err());
}

#[test]
fn master_key_rejects_wrong_length() {
    assert!(MasterKey::from_slice(&[FieldElement::ONE; 35]).is_err());
    assert!(MasterKey::from_slice(&[FieldElement::ONE; 37]).is_err());
}

/// S5: SEC80, m=12, n=1 produces exactly n*(36-m) = 24 elements, each < p.
#[test]
fn s5_single_block_shape() {
    let mut cipher = keyed(SecurityLevel::Sec80, 12);
    let out = cipher.generate_keystream(1).unwrap();
    assert_eq!(out.len(), 24);
    for elem in &out {
        assert!(elem.0 < P);
    }
}

/// S6: n=2 gives 48 elements, whose first 24 equal the single-block case,
/// since block j=0's output doesn't depend on how many blocks follow it.
#[test]
fn s6_two_blocks_prefix_matches_one_block() {
    let mut one = keyed(SecurityLevel::Sec80, 12);
    let single = one.generate_keystream(1).unwrap();

    let mut two = keyed(SecurityLevel::Sec80, 12);
    let double = two.generate_keystream(2).unwrap();

    assert_eq!(double.len(), 48);
    assert_eq!(&double[..24], &single[..]);
}

#[test]
fn generate_block_matches_generate_keystream_slice() {
    let cipher = keyed(SecurityLevel::Sec80, 12);
    let block0 = cipher.generate_block(0).unwrap();
    let block1 = cipher.generate_block(1).unwrap();

    let mut stream_cipher = keyed(SecurityLevel::Sec80, 12);
    let stream = stream_cipher.generate_keystream(2).unwrap();

    assert_eq!(&stream[..24], &block0[..]);
    assert_eq!(&stream[24..], &block1[..]);
}

#[test]
fn generate_keystream_advances_internal_counter() {
    let mut cipher = keyed(SecurityLevel::Sec80, 12);
    let first = cipher.generate_keystream(1).unwrap();
    let second = cipher.generate_keystream(1).unwrap();
    let reference_block1 = cipher.generate_block(1).unwrap();
    assert_ne!(first, second);
    assert_eq!(second, reference_block1);
}

#[test]
fn determinism_across_fresh_instances() {
    let mut a = keyed(SecurityLevel::Sec80, 12);
    let mut b = keyed(SecurityLevel::Sec80, 12);
    assert_eq!(
        a.generate_keystream(3).unwrap(),
        b.generate_keystream(3).unwrap()
    );
}

/// §8 invariant 8: the security level's round count must actually affect
/// the keystream, since it's the only thing distinguishing SEC80 from
/// SEC128 for identical key/nonce/modulus/truncation.
#[test]
fn security_levels_have_distinct_round_counts_and_outputs() {
    assert_eq!(SecurityLevel::Sec80.rounds(), 5);
    assert_eq!(SecurityLevel::Sec128.rounds(), 6);

    let mut sec80 = keyed(SecurityLevel::Sec80, 12);
    let mut sec128 = keyed(SecurityLevel::Sec128, 12);
    assert_ne!(
        sec80.generate_keystream(1).unwrap(),
        sec128.generate_keystream(1).unwrap()
    );
}

#[test]
fn different_nonces_give_different_keystreams() {
    let key = MasterKey::from_slice(&[FieldElement::ONE; STATE_SIZE]).unwrap();

    let mut a = Cipher::new(P, SecurityLevel::Sec80, 12).unwrap();
    a.init(key, Nonce::new(vec![1u8, 2, 3, 4])).unwrap();

    let key = MasterKey::from_slice(&[FieldElement::ONE; STATE_SIZE]).unwrap();
    let mut b = Cipher::new(P, SecurityLevel::Sec80, 12).unwrap();
    b.init(key, Nonce::new(vec![5u8, 6, 7, 8])).unwrap();

    assert_ne!(
        a.generate_keystream(1).unwrap(),
        b.generate_keystream(1).unwrap()
    );
}

#[test]
fn zero_truncation_keeps_the_full_state() {
    let mut cipher = keyed(SecurityLevel::Sec80, 0);
    let out = cipher.generate_keystream(1).unwrap();
    assert_eq!(out.len(), STATE_SIZE);
}
