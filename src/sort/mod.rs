use std::cmp::Ordering;

pub mod comparator;
#[cfg(test)]
mod tests;

/// Stable top-down merge sort.
///
/// Returns a new vector; `items` is left untouched. Every level of the
/// recursion allocates its own merged output.
pub fn merge_sort<T, F>(items: &[T], compare: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let middle = items.len() / 2;
    let left = merge_sort(&items[..middle], compare);
    let right = merge_sort(&items[middle..], compare);
    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // ties go left
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
