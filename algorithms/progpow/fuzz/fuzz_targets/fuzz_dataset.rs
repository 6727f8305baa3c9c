#![no_main]

use libfuzzer_sys::fuzz_target;
use progpow::{DatasetError, EpochContext, MemoryDataset};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes either decode into a usable dataset or are rejected.
    match MemoryDataset::from_le_bytes(data) {
        Ok(dataset) => {
            assert_eq!(dataset.size_bytes(), data.len());
            assert_eq!(dataset.num_words() * 4, data.len());
            let result = progpow::hash(&dataset, 0, &[0u8; 32], 0);
            assert!(progpow::verify(
                &dataset,
                0,
                &[0u8; 32],
                &result.mix_hash,
                0,
                &[0xff; 32]
            ));
        }
        Err(DatasetError::Empty) => assert!(data.is_empty()),
        Err(DatasetError::Misaligned { len }) => assert_ne!(len % 256, 0),
        Err(DatasetError::TooSmall { words }) => assert!(words < 4096),
        Err(DatasetError::TooLarge { .. }) => unreachable!("fuzz inputs are far below 1 TiB"),
    }
});
