//! Tests for arc revision and AC-3

#[cfg(test)]
mod tests {
    use crossfill::CrosswordError;
    use crossfill::algorithm::domain::DomainStore;
    use crossfill::algorithm::propagation::{ArcQueue, ac3, incoming_arcs, revise};
    use crossfill::puzzle::model::Puzzle;
    use crossfill::puzzle::structure::Structure;
    use crossfill::puzzle::vocabulary::WordList;

    fn puzzle(text: &str) -> Puzzle {
        Puzzle::from_structure(Structure::from_text(text).unwrap()).unwrap()
    }

    fn texts(domains: &DomainStore, words: &WordList, slot: usize) -> Vec<String> {
        domains
            .words(slot)
            .into_iter()
            .filter_map(|id| words.get(id))
            .map(|word| word.as_str().to_string())
            .collect()
    }

    // Tests the queue ignores arcs that are already pending
    // Verified by leaving popped arcs in the pending set
    #[test]
    fn test_queue_deduplicates_pending() {
        let mut queue = ArcQueue::from_arcs([(0, 1), (1, 0), (0, 1)]);
        assert_eq!(queue.len(), 2);
        assert!(!queue.push((1, 0)));

        assert_eq!(queue.pop(), Some((0, 1)));
        assert!(queue.push((0, 1)));
        assert_eq!(queue.pop(), Some((1, 0)));
        assert_eq!(queue.pop(), Some((0, 1)));
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }

    // Tests revise removes words whose overlap letter has no support
    // Verified by reading the support letter at offset i of y
    #[test]
    fn test_revise_removes_unsupported() {
        // Down (0, 0) length 2 crosses across (0, 0) length 3 at their first letters
        let puzzle = puzzle("___\n_##");
        let words = WordList::new(["AX", "CO", "CAT", "DOG"]);
        let mut domains = DomainStore::initialize(&puzzle, &words);

        assert!(revise(&puzzle, &words, &mut domains, 0, 1).unwrap());
        assert_eq!(texts(&domains, &words, 0), vec!["CO"]);

        assert!(revise(&puzzle, &words, &mut domains, 1, 0).unwrap());
        assert_eq!(texts(&domains, &words, 1), vec!["CAT"]);

        assert!(!revise(&puzzle, &words, &mut domains, 1, 0).unwrap());
    }

    // Tests revising against an empty neighbor empties the domain
    // Verified by keeping words when the neighbor domain is empty
    #[test]
    fn test_revise_against_empty_neighbor() {
        let puzzle = puzzle("___\n_##");
        let words = WordList::new(["CO", "CAT"]);
        let mut domains = DomainStore::initialize(&puzzle, &words);
        let cat = words.id_of("CAT").unwrap();
        domains.remove(1, cat).unwrap();

        assert!(revise(&puzzle, &words, &mut domains, 0, 1).unwrap());
        assert!(domains.has_empty());
        assert_eq!(domains.len(0), 0);
    }

    // Tests revising a pair that does not overlap is an invariant violation
    // Verified by treating a missing overlap as no change
    #[test]
    fn test_revise_without_overlap() {
        let puzzle = puzzle("___\n###\n___");
        let words = WordList::new(["CAT"]);
        let mut domains = DomainStore::initialize(&puzzle, &words);

        assert!(matches!(
            revise(&puzzle, &words, &mut domains, 0, 1),
            Err(CrosswordError::InvariantViolation { .. })
        ));
    }

    // Tests AC-3 only shrinks domains and is idempotent
    // Verified by making revise a no-op
    #[test]
    fn test_ac3_monotone_and_idempotent() {
        let puzzle = puzzle("____\n_##_\n_##_\n____");
        let words = WordList::new([
            "CODE", "CART", "EXIT", "TENT", "DOGS", "ECHO", "TIDE", "MOON", "ZZZZ",
        ]);
        let mut domains = DomainStore::initialize(&puzzle, &words);
        let before = domains.clone();

        ac3(&puzzle, &words, &mut domains, puzzle.arcs()).unwrap();
        for slot in 0..puzzle.slot_count() {
            let after = domains.domain(slot).unwrap();
            let initial = before.domain(slot).unwrap();
            assert!(after.iter().all(|word| initial.contains(word)));
        }
        let size = |store: &DomainStore| -> usize {
            (0..puzzle.slot_count()).map(|slot| store.len(slot)).sum()
        };
        assert!(size(&domains) < size(&before));

        let settled = domains.clone();
        ac3(&puzzle, &words, &mut domains, puzzle.arcs()).unwrap();
        assert_eq!(domains, settled);
    }

    // Tests every remaining word has a supporting word across each overlap
    // Verified by returning after the first changed arc
    #[test]
    fn test_ac3_leaves_arc_consistency() {
        let puzzle = puzzle("____\n_##_\n_##_\n____");
        let words = WordList::new(["CODE", "CART", "EXIT", "TENT", "DOGS", "ECHO", "TIDE"]);
        let mut domains = DomainStore::initialize(&puzzle, &words);
        ac3(&puzzle, &words, &mut domains, puzzle.arcs()).unwrap();

        for (x, y) in puzzle.arcs() {
            let (i, j) = puzzle.overlap(x, y).unwrap();
            for word in domains.words(x) {
                let letter = words.get(word).unwrap().letter(i);
                assert!(
                    domains
                        .words(y)
                        .iter()
                        .any(|&other| words.get(other).unwrap().letter(j) == letter)
                );
            }
        }
    }

    // Tests a changed slot prunes both of its direct neighbors
    // Verified by seeding ac3 with outgoing instead of incoming arcs
    #[test]
    fn test_ac3_prunes_direct_neighbors() {
        // Across (0, 0) crosses down (0, 2), which crosses across (2, 2)
        let puzzle = puzzle("___##\n##_##\n##___");
        let words = WordList::new(["ABC", "CDE", "EFG", "XYZ", "ZZZ"]);
        let mut domains = DomainStore::initialize(&puzzle, &words);
        let cde = words.id_of("CDE").unwrap();
        for word in domains.words(1) {
            if word != cde {
                domains.remove(1, word).unwrap();
            }
        }

        ac3(&puzzle, &words, &mut domains, incoming_arcs(&puzzle, 1)).unwrap();

        let across_top = puzzle.slots().iter().position(|s| s.row == 0 && s.col == 0).unwrap();
        let across_bottom = puzzle.slots().iter().position(|s| s.row == 2 && s.col == 2).unwrap();
        assert_eq!(texts(&domains, &words, across_top), vec!["ABC"]);
        assert_eq!(texts(&domains, &words, across_bottom), vec!["EFG"]);
    }

    // Tests pruning reaches a slot two overlaps away from the change
    // Verified by removing the neighbor re-enqueue loop from ac3
    #[test]
    fn test_ac3_reenqueues_across_two_hops() {
        // Across (0, 0) crosses down (0, 2), which crosses across (2, 2); the
        // bottom slot shares no cell with the top one
        let puzzle = puzzle("___##\n##_##\n##___");
        let words = WordList::new(["ABC", "CDE", "CXY", "EFG", "YQQ", "ZZZ"]);
        let mut domains = DomainStore::initialize(&puzzle, &words);
        let top = puzzle.slots().iter().position(|s| s.row == 0 && s.col == 0).unwrap();
        let middle = puzzle.slots().iter().position(|s| s.row == 0 && s.col == 2).unwrap();
        let bottom = puzzle.slots().iter().position(|s| s.row == 2 && s.col == 2).unwrap();
        assert_eq!(puzzle.overlap(top, bottom), None);

        domains.set_singleton(top, words.id_of("ABC").unwrap()).unwrap();
        let start = incoming_arcs(&puzzle, top);
        assert!(start.iter().all(|&(x, _)| x != bottom));

        ac3(&puzzle, &words, &mut domains, start).unwrap();

        assert_eq!(texts(&domains, &words, middle), vec!["CDE", "CXY"]);
        assert_eq!(texts(&domains, &words, bottom), vec!["EFG", "YQQ"]);
    }

    // Tests incoming arcs point at the slot from each neighbor
    // Verified by swapping the arc direction in incoming_arcs
    #[test]
    fn test_incoming_arcs() {
        let puzzle = puzzle("___\n_#_\n_#_");
        let across = 1;
        let arcs = incoming_arcs(&puzzle, across);
        assert_eq!(arcs, vec![(0, across), (2, across)]);
    }
}
