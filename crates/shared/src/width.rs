use ethers_core::types::{I256, U256};

/// Largest signed value representable in `width` bits.
pub fn signed_max_value(width: u16) -> I256 {
    assert!((1..=256).contains(&width), "unsupported bit width: {width}");
    if width == 256 {
        I256::MAX
    } else {
        I256::from_raw(U256::from(1u8) << U256::from(width - 1)) - I256::from(1)
    }
}

/// Smallest signed value representable in `width` bits.
pub fn signed_min_value(width: u16) -> I256 {
    assert!((1..=256).contains(&width), "unsupported bit width: {width}");
    if width == 256 {
        I256::MIN
    } else {
        signed_max_value(width) * I256::from(-1i32) - I256::from(1i32)
    }
}
