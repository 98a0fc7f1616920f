//! In-place array shifting kept for older callers.
//!
//! Both helpers are bounds-checked and report failure with `false` instead of
//! panicking. New code should use [`slice::copy_within`] or `Vec::remove`.

use shapecmp_core::Value;

/// Shifts `arr[start + count..arr_len]` left by `count` places, to `start`.
///
/// The last `count` slots of the range keep their old contents. Returns false
/// without touching `arr` if the range does not fit.
#[deprecated(since = "0.2.0", note = "use `slice::copy_within` or `Vec::drain`")]
pub fn move_forward<T: Clone>(arr: &mut [T], arr_len: usize, start: usize, count: usize) -> bool {
    if arr_len > arr.len() {
        return false;
    }
    let Some(moved) = arr_len
        .checked_sub(count)
        .and_then(|rest| rest.checked_sub(start))
    else {
        return false;
    };
    for dst in start..start + moved {
        let src = arr[dst + count].clone();
        arr[dst] = src;
    }
    true
}

/// Removes the element at `index` by shifting the tail left by one.
///
/// When `last` is given it is written into the final slot; otherwise the
/// final slot keeps a copy of its previous value. Returns false if `index`
/// is out of bounds.
#[deprecated(since = "0.2.0", note = "use `Vec::remove`")]
#[allow(deprecated)]
pub fn remove<T: Clone>(arr: &mut [T], index: usize, last: Option<T>) -> bool {
    if index >= arr.len() {
        return false;
    }
    move_forward(arr, arr.len(), index, 1);
    if let (Some(last), Some(slot)) = (last, arr.last_mut()) {
        *slot = last;
    }
    true
}

/// Removes the element at `index` and writes `Value::Null` into the final slot.
#[deprecated(since = "0.2.0", note = "use `Vec::remove`")]
#[allow(deprecated)]
pub fn remove_value(arr: &mut [Value], index: usize) -> bool {
    remove(arr, index, Some(Value::Null))
}
