use std::fmt::Write;

/// Plot the head's walk as an ASCII position-vs-step chart: one row per walk
/// position (the head itself is step 0), with the track marked on a
/// horizontal axis of `width` columns, scaled to the highest track visited.
///
/// `width` must be at least 2.
pub fn plot_walk(head: u32, order: &[u32], width: usize) -> String {
    assert!(width >= 2, "Chart width must be at least 2.");
    let max_track = order.iter().copied().chain([head]).max().unwrap();

    // Each row consists of a 4-character step number, a 6-character track
    // number, the plot area between two vertical bars, and a newline.
    let mut str = String::with_capacity((order.len() + 1) * (width + 15));
    let walk = std::iter::once(head).chain(order.iter().copied());
    for (step, track) in walk.enumerate() {
        let column = if max_track == 0 {
            0
        } else {
            track as usize * (width - 1) / max_track as usize
        };
        write!(str, "{:>4}  {:>6}  |", step, track).unwrap();
        for _ in 0..column {
            str.push(' ');
        }
        str.push('*');
        for _ in column + 1..width {
            str.push(' ');
        }
        str.push_str("|\n");
    }
    str
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_walk() {
        let chart = plot_walk(0, &[10, 5], 11);
        assert_eq!(chart, "\
\x20  0       0  |*          |
\x20  1      10  |          *|
\x20  2       5  |     *     |
");
    }

    #[test]
    fn test_stationary_head() {
        // A zero-track walk must not divide by zero.
        let chart = plot_walk(0, &[], 4);
        assert_eq!(chart, "   0       0  |*   |\n");
    }

    #[test]
    fn test_row_shape() {
        let chart = plot_walk(53, &[98, 183, 37, 122], 40);
        let lines = chart.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 5);
        for line in &lines {
            assert_eq!(line.len(), 4 + 2 + 6 + 2 + 1 + 40 + 1);
            assert_eq!(line.matches('*').count(), 1);
        }
        // The maximum track sits in the last column.
        let max_row = lines[2];
        assert_eq!(max_row.chars().rev().nth(1).unwrap(), '*');
    }
}
