use getrandom::getrandom;
use oorandom::Rand64;

pub fn rng64(seed: u128) -> Rand64 {
    Rand64::new(seed)
}

pub fn os_random_seed() -> u128 {
    let mut buf = [0; 16];
    let _res = getrandom(&mut buf);
    u128::from_le_bytes(buf)
}

/// Draws a fresh 128 bit seed from an existing generator, used to hand every ant its own stream.
pub fn derive_seed(rng: &mut Rand64) -> u128 {
    rng.rand_u64() as u128 + ((rng.rand_u64() as u128) << 64)
}

/// Fisher-Yates shuffle driven by the given generator.
pub fn shuffle<T>(rng: &mut Rand64, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = rng.rand_range(0..(i as u64 + 1)) as usize;
        slice.swap(i, j);
    }
}
