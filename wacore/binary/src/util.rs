/// Big-endian accumulation of the first `width` bytes of `data`.
///
/// Returns `None` when `data` is shorter than `width` or the result would not
/// fit in a `u64`.
pub fn bytes_to_uint(data: &[u8], width: usize) -> Option<u64> {
    if width > 8 || data.len() < width {
        return None;
    }
    Some(
        data[..width]
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | u64::from(b)),
    )
}
