//! Connector lines outlining a shape instance.

use super::types::{Connector, NoteRef};

/// Join the notes of one instance into an outline.
///
/// Notes are ordered by string, then fret. Each consecutive pair is joined
/// when it is the first pair or when the two notes sit on neighbouring
/// strings; a pair that skips a string gets no line, and scanning resumes
/// from its upper note.
///
/// ```
/// use fretshape::{derive_connectors, NoteRef};
///
/// let notes = [
///     NoteRef { string_index: 2, fret: 5 },
///     NoteRef { string_index: 0, fret: 8 },
///     NoteRef { string_index: 1, fret: 7 },
/// ];
/// let connectors = derive_connectors(notes, 0);
/// assert_eq!(connectors.len(), 2);
/// assert_eq!(connectors[0].from.string_index, 0);
/// assert_eq!(connectors[1].to.string_index, 2);
/// ```
pub fn derive_connectors(
    notes: impl IntoIterator<Item = NoteRef>,
    display_group: u32,
) -> Vec<Connector> {
    let mut sorted: Vec<NoteRef> = notes.into_iter().collect();
    sorted.sort_unstable();

    sorted
        .windows(2)
        .enumerate()
        .filter(|(idx, pair)| *idx == 0 || pair[0].string_index.abs_diff(pair[1].string_index) == 1)
        .map(|(_, pair)| Connector {
            from: pair[0],
            to: pair[1],
            display_group,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(string_index: usize, fret: u8) -> NoteRef {
        NoteRef { string_index, fret }
    }

    fn pairs(connectors: &[Connector]) -> Vec<(usize, usize)> {
        connectors
            .iter()
            .map(|c| (c.from.string_index, c.to.string_index))
            .collect()
    }

    #[test]
    fn test_contiguous_triad_gets_two_connectors() {
        let connectors = derive_connectors([note(3, 2), note(4, 1), note(5, 0)], 7);
        assert_eq!(pairs(&connectors), vec![(3, 4), (4, 5)]);
        assert!(connectors.iter().all(|c| c.display_group == 7));
    }

    #[test]
    fn test_first_pair_is_always_joined() {
        // 0 -> 2 skips a string but is the first pair.
        let connectors = derive_connectors([note(0, 3), note(2, 2), note(3, 2)], 0);
        assert_eq!(pairs(&connectors), vec![(0, 2), (2, 3)]);
    }

    #[test]
    fn test_later_gap_is_not_joined() {
        let connectors = derive_connectors([note(0, 3), note(1, 2), note(3, 2), note(4, 3)], 0);
        assert_eq!(pairs(&connectors), vec![(0, 1), (3, 4)]);
    }

    #[test]
    fn test_same_string_ties_sort_by_fret() {
        let connectors = derive_connectors([note(1, 5), note(1, 2), note(2, 4)], 0);
        assert_eq!(connectors[0].from, note(1, 2));
        assert_eq!(connectors[0].to, note(1, 5));
        assert_eq!(connectors[1].to, note(2, 4));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(derive_connectors(Vec::new(), 0).is_empty());
        assert!(derive_connectors([note(2, 2)], 0).is_empty());
    }
}
