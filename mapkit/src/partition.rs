//! Balanced chunking of a sequence

use mapkit_core::{Key, Map, MapError, Result, Value};
use tracing::trace;

/// Split `input` into at most `partition_count` contiguous chunks of
/// near-equal size.
///
/// With `n` entries, the first `n % partition_count` chunks hold
/// `n / partition_count + 1` entries and the rest hold `n / partition_count`.
/// Chunks stop once the input is exhausted, so fewer than `partition_count`
/// chunks come back when `n < partition_count`, and none for empty input.
///
/// String keys are always kept. Integer keys are renumbered from 0 within
/// each chunk unless `preserve_keys` is set.
///
/// # Errors
///
/// `InvalidArgument` if `partition_count` is zero.
pub fn partition(input: &Map, partition_count: usize, preserve_keys: bool) -> Result<Vec<Map>> {
    if partition_count < 1 {
        return Err(MapError::InvalidArgument(
            "partition count must be a positive integer".to_string(),
        ));
    }

    let input_len = input.len();
    let base_len = input_len / partition_count;
    let remainder = input_len % partition_count;
    trace!(input_len, partition_count, base_len, remainder, "partitioning");

    let mut entries = input.iter();
    let mut partitions = Vec::with_capacity(partition_count.min(input_len));
    let mut offset = 0;

    for partition_index in 0..partition_count {
        if offset >= input_len {
            break;
        }

        let slice_len = if partition_index < remainder {
            base_len + 1
        } else {
            base_len
        };

        let slice = entries.by_ref().take(slice_len);
        partitions.push(slice_entries(slice, preserve_keys)?);
        offset += slice_len;
    }

    Ok(partitions)
}

/// Collect a slice of entries, renumbering integer keys unless preserving.
fn slice_entries<'a, I>(entries: I, preserve_keys: bool) -> Result<Map>
where
    I: Iterator<Item = (&'a Key, &'a Value)>,
{
    let mut chunk = Map::new();
    for (key, value) in entries {
        if preserve_keys || !key.is_int() {
            chunk.insert(key, value.clone());
        } else {
            chunk.push(value.clone())?;
        }
    }
    Ok(chunk)
}
