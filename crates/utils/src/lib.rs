extern crate rand;

use rand::Rng;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
                            0123456789";

/// Random positive id in `1..i64::MAX`, so it never equals `i64::MAX`
pub fn create_random_id() -> i64 {
    let mut rng = rand::thread_rng();
    rng.gen_range(1..i64::MAX)
}

/// Lowercase alphanumeric name, e.g. for throwaway collections in tests
pub fn create_random_name(len: usize) -> String {
    let mut rng = rand::thread_rng();

    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
