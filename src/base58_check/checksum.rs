use sha2::{Digest, Sha256};

/// Hashes a buffer twice, producing a 32 byte digest. Checksums are the first 4 bytes.
pub trait DoubleHash {
    fn double_hash(&self, buffer: &[u8]) -> [u8; 32];
}

/// SHA-256 applied twice.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sha256d;

impl DoubleHash for Sha256d {
    fn double_hash(&self, buffer: &[u8]) -> [u8; 32] {
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&Sha256::digest(&Sha256::digest(buffer)));
        hash
    }
}

impl<H: DoubleHash + ?Sized> DoubleHash for &H {
    fn double_hash(&self, buffer: &[u8]) -> [u8; 32] {
        (**self).double_hash(buffer)
    }
}

pub fn compute_checksum(hasher: &impl DoubleHash, buffer: impl AsRef<[u8]>) -> [u8; 4] {
    let hash = hasher.double_hash(buffer.as_ref());
    [hash[0], hash[1], hash[2], hash[3]]
}
