use rand::{thread_rng, Rng};

/// Returns `size` random bytes.
#[must_use]
pub fn bytes(size: usize) -> Vec<u8> {
    let mut rng = thread_rng();
    (0..size).map(|_| rng.gen::<u8>()).collect()
}

/// Returns a random array of bytes, for example an info-hash.
#[must_use]
pub fn array<const N: usize>() -> [u8; N] {
    let mut array = [0u8; N];
    thread_rng().fill(&mut array[..]);
    array
}
