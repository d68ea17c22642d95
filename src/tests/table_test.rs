#[cfg(test)]
mod tests {
    use crate::error::SimError;
    use crate::replacer::Policy;
    use crate::table::{Access, PageTable, PageId};

    fn run(table: &mut PageTable, sequence: &[PageId]) {
        for &page in sequence {
            table.reference(page).expect("in-range reference");
        }
    }

    #[test]
    fn construction_rejects_zero_capacity_and_zero_pages() {
        assert!(matches!(
            PageTable::new(0, 16, Policy::Fifo),
            Err(SimError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            PageTable::new(4, 0, Policy::Fifo),
            Err(SimError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn out_of_range_reference_is_a_contract_violation_not_a_fault() {
        let mut table = PageTable::new(4, 16, Policy::Lru).unwrap();
        let err = table.reference(16).unwrap_err();
        assert_eq!(
            SimError::InvalidPageId {
                page: 16,
                num_pages: 16
            },
            err
        );
        // The failed call counted nothing.
        assert_eq!(0, table.counters().total_references());
    }

    #[test]
    fn resident_set_never_exceeds_capacity_and_fills_permanently() {
        for policy in Policy::ALL {
            let mut table = PageTable::new(3, 8, policy).unwrap();
            let sequence = [0, 1, 2, 3, 4, 5, 0, 6, 7, 1, 2, 3];
            for (i, &page) in sequence.iter().enumerate() {
                table.reference(page).unwrap();
                assert!(table.resident_count() <= 3, "{policy} overfilled");
                if i >= 2 {
                    // After the first `capacity` distinct pages, the table
                    // stays full for the rest of the run.
                    assert_eq!(3, table.resident_count(), "{policy} drained");
                }
            }
        }
    }

    #[test]
    fn hits_plus_misses_equals_references_for_every_policy() {
        for policy in Policy::ALL {
            let mut table = PageTable::new(3, 8, policy).unwrap();
            let sequence = [0, 1, 0, 2, 3, 4, 0, 1, 5, 5, 5, 2];
            for (i, &page) in sequence.iter().enumerate() {
                table.reference(page).unwrap();
                let counters = table.counters();
                assert_eq!(i as u64 + 1, counters.total_references(), "{policy}");
            }
        }
    }

    #[test]
    fn fifo_evicts_earliest_admitted() {
        let mut table = PageTable::new(3, 8, Policy::Fifo).unwrap();
        run(&mut table, &[0, 1, 2]);
        assert!(table.entry(0).unwrap().is_resident());

        // The table is full; page 3 must displace page 0, the earliest load.
        assert!(table.reference(3).unwrap().is_fault());
        assert!(!table.entry(0).unwrap().is_resident());
        assert!(table.entry(1).unwrap().is_resident());
        assert!(table.entry(2).unwrap().is_resident());

        // 0 was just evicted, so re-referencing it faults again.
        assert!(table.reference(0).unwrap().is_fault());

        let counters = table.counters();
        assert_eq!(0, counters.hits);
        assert_eq!(5, counters.page_faults());
    }

    #[test]
    fn lru_and_fifo_diverge_on_an_early_page_rehit() {
        // [0, 1, 2, 0, 3] with 3 frames: the hit on 0 refreshes its recency,
        // so LRU sacrifices 1 while FIFO still sacrifices 0.
        let sequence = [0, 1, 2, 0, 3];

        let mut lru = PageTable::new(3, 8, Policy::Lru).unwrap();
        run(&mut lru, &sequence);
        assert!(lru.entry(0).unwrap().is_resident());
        assert!(!lru.entry(1).unwrap().is_resident());
        assert_eq!(1, lru.counters().hits);
        assert_eq!(4, lru.counters().page_faults());

        let mut fifo = PageTable::new(3, 8, Policy::Fifo).unwrap();
        run(&mut fifo, &sequence);
        assert!(!fifo.entry(0).unwrap().is_resident());
        assert!(fifo.entry(1).unwrap().is_resident());
        assert_eq!(1, fifo.counters().hits);
        assert_eq!(4, fifo.counters().page_faults());

        // The divergence is observable on the next reference to 0.
        assert!(matches!(lru.reference(0).unwrap(), Access::Hit(_)));
        assert!(fifo.reference(0).unwrap().is_fault());
    }

    #[test]
    fn lfu_evicts_lowest_frequency() {
        // [0, 1, 2, 0, 1, 3] with 3 frames: frequencies are 0→2, 1→2, 2→1,
        // so page 3 displaces page 2.
        let mut table = PageTable::new(3, 8, Policy::Lfu).unwrap();
        run(&mut table, &[0, 1, 2, 0, 1, 3]);

        assert!(!table.entry(2).unwrap().is_resident());
        assert!(table.entry(0).unwrap().is_resident());
        assert!(table.entry(1).unwrap().is_resident());
        assert!(table.entry(3).unwrap().is_resident());
        assert_eq!(2, table.counters().hits);
        assert_eq!(4, table.counters().page_faults());
    }

    #[test]
    fn lfu_frequency_tie_breaks_to_oldest_touch() {
        // All of 0, 1, 2 end at frequency 2; their last touches are ordered
        // 2 < 0 < 1, so the tie resolves against page 2. FIFO would have
        // taken page 0 here.
        let mut table = PageTable::new(3, 8, Policy::Lfu).unwrap();
        run(&mut table, &[0, 1, 2, 2, 0, 1, 3]);

        assert!(!table.entry(2).unwrap().is_resident());
        assert!(table.entry(0).unwrap().is_resident());
        assert!(table.entry(1).unwrap().is_resident());
    }

    #[test]
    fn lfu_frequency_accumulates_across_reload() {
        // Page 0 is evicted at t6 and reloaded at t7. Its count carries
        // over the reload (2 + 1 = 3), so at t8 it ties page 1 on frequency
        // and survives on the recency tie-break. Had the count reset on
        // reload, page 0 would have been the victim instead.
        let mut table = PageTable::new(2, 8, Policy::Lfu).unwrap();
        run(&mut table, &[0, 0, 1, 1, 1, 2, 0, 3]);

        assert_eq!(3, table.entry(0).unwrap().access_count);
        assert!(table.entry(0).unwrap().is_resident());
        assert!(!table.entry(1).unwrap().is_resident());
        assert!(table.entry(3).unwrap().is_resident());
    }

    #[test]
    fn counter_reads_are_idempotent() {
        let mut table = PageTable::new(3, 8, Policy::Lru).unwrap();
        run(&mut table, &[0, 1, 2, 3, 0, 1]);

        let first = table.counters();
        let second = table.counters();
        let third = table.counters();
        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn identical_trials_reproduce_identical_counters() {
        let sequence = [0, 3, 1, 4, 2, 0, 3, 5, 1, 0, 6, 7, 2, 4];
        for policy in Policy::ALL {
            let mut a = PageTable::new(3, 8, policy).unwrap();
            let mut b = PageTable::new(3, 8, policy).unwrap();
            run(&mut a, &sequence);
            run(&mut b, &sequence);
            assert_eq!(a.counters(), b.counters(), "{policy} not reproducible");
        }
    }
}
